//! Merging remotely fetched videos into the locally cached list

use super::models::Video;

/// Fold a freshly fetched video feed into the locally known list.
///
/// Known videos (matched by id) take the remote title and description;
/// `watched` and the identity fields stay local. Unknown videos are appended.
/// Videos missing from the feed are kept, so repeated calls with the same
/// snapshot converge. Returns true iff at least one video was appended.
///
/// Insertion order is whatever the feed delivered; callers that display
/// chronologically re-sort afterwards.
pub fn reconcile(local: &mut Vec<Video>, remote: Vec<Video>) -> bool {
    let mut changed = false;

    for incoming in remote {
        match local.iter_mut().find(|known| known.id == incoming.id) {
            Some(known) => {
                known.title = incoming.title;
                known.description = incoming.description;
            }
            None => {
                local.push(incoming);
                changed = true;
            }
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn video(id: &str, title: &str, watched: bool) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("about {title}"),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            playlist_id: "p".to_string(),
            watched,
        }
    }

    #[test]
    fn appends_unknown_videos() {
        let mut local = vec![video("a", "A", false)];
        let remote = vec![video("a", "A", false), video("b", "B", false)];

        let changed = reconcile(&mut local, remote);

        assert!(changed);
        assert_eq!(local.len(), 2);
        assert_eq!(local[1].id, "b");
        assert!(!local[1].watched);
    }

    #[test]
    fn remote_wins_for_descriptive_fields_only() {
        let mut local = vec![video("a", "Old", true)];
        let remote = vec![video("a", "New", false)];

        let changed = reconcile(&mut local, remote);

        assert!(!changed);
        assert_eq!(local[0].title, "New");
        assert_eq!(local[0].description, "about New");
        assert!(local[0].watched, "watched is locally owned");
    }

    #[test]
    fn keeps_videos_absent_from_the_feed() {
        let mut local = vec![video("a", "A", true), video("b", "B", false)];
        let remote = vec![video("b", "B", false)];

        let changed = reconcile(&mut local, remote);

        assert!(!changed);
        assert_eq!(local.len(), 2);
        assert_eq!(local[0].id, "a");
    }

    #[test]
    fn second_pass_with_same_snapshot_reports_no_change() {
        let mut local = vec![video("a", "A", false)];
        let remote = vec![video("a", "A", false), video("b", "B", false)];

        assert!(reconcile(&mut local, remote.clone()));
        let after_first = local.clone();

        assert!(!reconcile(&mut local, remote));
        assert_eq!(local, after_first);
    }

    #[test]
    fn merge_scenario_end_to_end() {
        let mut local = vec![video("a", "Old", true)];
        let remote = vec![video("a", "New", false), video("b", "B", false)];

        let changed = reconcile(&mut local, remote);

        assert!(changed);
        assert_eq!(local.len(), 2);
        assert_eq!(local[0].id, "a");
        assert_eq!(local[0].title, "New");
        assert!(local[0].watched);
        assert_eq!(local[1].id, "b");
        assert_eq!(local[1].title, "B");
        assert!(!local[1].watched);
    }
}
