//! In-place chronological sorting of playlist videos

use super::models::Video;

/// Sort videos by ascending publish date.
///
/// Equal timestamps end up grouped but their relative order follows the
/// partition mechanics, not insertion order.
pub fn sort_by_published(videos: &mut [Video]) {
    if videos.len() > 1 {
        quicksort(videos, 0, videos.len() - 1);
    }
}

fn quicksort(videos: &mut [Video], low: usize, high: usize) {
    if low >= high {
        return;
    }

    let pivot = partition(videos, low, high);

    if pivot > low {
        quicksort(videos, low, pivot - 1);
    }
    if pivot < high {
        quicksort(videos, pivot + 1, high);
    }
}

fn partition(videos: &mut [Video], low: usize, high: usize) -> usize {
    let pivot = videos[high].published_at;
    let mut slot = low;

    for i in low..high {
        if videos[i].published_at <= pivot {
            videos.swap(i, slot);
            slot += 1;
        }
    }

    // The pivot has to move into its slot; when the rightmost element is also
    // the largest, skipping this swap would leave the range unchanged and
    // recurse forever.
    videos.swap(slot, high);
    slot
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn video(id: &str, secs: i64) -> Video {
        Video {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            published_at: at(secs),
            playlist_id: "p".to_string(),
            watched: false,
        }
    }

    fn keys(videos: &[Video]) -> Vec<i64> {
        videos.iter().map(|v| v.published_at.timestamp()).collect()
    }

    #[test]
    fn sorts_out_of_order_input() {
        let mut videos = vec![video("a", 3), video("b", 1), video("c", 2)];
        sort_by_published(&mut videos);
        assert_eq!(keys(&videos), vec![1, 2, 3]);
    }

    #[test]
    fn sorts_with_duplicate_keys() {
        let mut videos = vec![video("a", 2), video("b", 2), video("c", 1)];
        sort_by_published(&mut videos);
        assert_eq!(keys(&videos), vec![1, 2, 2]);
    }

    #[test]
    fn sorted_input_stays_sorted() {
        let mut videos = vec![video("a", 1), video("b", 2), video("c", 3), video("d", 4)];
        sort_by_published(&mut videos);
        assert_eq!(keys(&videos), vec![1, 2, 3, 4]);
    }

    #[test]
    fn preserves_the_element_multiset() {
        let mut videos = vec![
            video("a", 5),
            video("b", 2),
            video("c", 5),
            video("d", 1),
            video("e", 2),
        ];
        sort_by_published(&mut videos);

        assert_eq!(keys(&videos), vec![1, 2, 2, 5, 5]);

        let mut ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn handles_descending_input() {
        let mut videos = vec![
            video("a", 392),
            video("b", 321),
            video("c", 22),
            video("d", 2),
            video("e", 1),
            video("f", -5),
        ];
        sort_by_published(&mut videos);
        assert_eq!(keys(&videos), vec![-5, 1, 2, 22, 321, 392]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut none: Vec<Video> = Vec::new();
        sort_by_published(&mut none);
        assert!(none.is_empty());

        let mut one = vec![video("a", 7)];
        sort_by_published(&mut one);
        assert_eq!(keys(&one), vec![7]);
    }
}
