//! Property-based tests for the reducer's toggle transitions: every toggle
//! is an involution, membership never duplicates, and the follow graph stays
//! symmetric under arbitrary toggle sequences.

use std::collections::BTreeSet;

use funguys::store::seed;
use funguys::store::{reducer::reduce, Action, AppState};
use proptest::prelude::*;

/// Membership comparisons ignore order: a toggle that removes and later
/// re-adds an entry appends it at the end of the list.
fn as_set(members: &[String]) -> BTreeSet<&str> {
    members.iter().map(String::as_str).collect()
}

fn seed_user_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("user1".to_string()),
        Just("user2".to_string()),
        Just("user3".to_string()),
    ]
}

fn seed_video_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("vid1".to_string()),
        Just("vid2".to_string()),
        Just("vid3".to_string()),
    ]
}

fn assert_follow_graph_symmetric(state: &AppState) {
    for user in &state.users {
        for followed in &user.following {
            let other = state.user(followed).expect("dangling follow edge");
            assert!(
                other.followers.contains(&user.id),
                "{} follows {} without a matching follower entry",
                user.id,
                other.id
            );
        }
    }
}

proptest! {
    #[test]
    fn like_toggle_twice_restores_membership(video_id in seed_video_id(), user_id in seed_user_id()) {
        let state = seed::demo_state();
        let action = Action::ToggleLike { video_id: video_id.clone(), user_id };

        let once = reduce(&state, action.clone());
        let twice = reduce(&once, action);

        prop_assert_eq!(
            as_set(&twice.video(&video_id).unwrap().likes),
            as_set(&state.video(&video_id).unwrap().likes)
        );
    }

    #[test]
    fn save_toggle_twice_restores_membership(video_id in seed_video_id(), user_id in seed_user_id()) {
        let state = seed::demo_state();
        let action = Action::ToggleSave { video_id: video_id.clone(), user_id };

        let once = reduce(&state, action.clone());
        let twice = reduce(&once, action);

        prop_assert_eq!(
            as_set(&twice.video(&video_id).unwrap().saves),
            as_set(&state.video(&video_id).unwrap().saves)
        );
    }

    #[test]
    fn repeated_like_toggles_never_duplicate_membership(
        video_id in seed_video_id(),
        user_id in seed_user_id(),
        toggles in 1usize..6,
    ) {
        let mut state = seed::demo_state();
        let vid = video_id.clone();
        for _ in 0..toggles {
            state = reduce(&state, Action::ToggleLike {
                video_id: video_id.clone(),
                user_id: user_id.clone(),
            });
        }

        let likes = &state.video(&vid).unwrap().likes;
        prop_assert!(likes.iter().filter(|id| **id == user_id).count() <= 1);
    }

    #[test]
    fn follow_toggle_twice_restores_both_sides(
        actor in seed_user_id(),
        target in seed_user_id(),
    ) {
        let state = seed::demo_state();
        let action = Action::ToggleFollow {
            target_user_id: target.clone(),
            current_user_id: actor.clone(),
        };

        let once = reduce(&state, action.clone());
        let twice = reduce(&once, action);

        prop_assert_eq!(
            as_set(&twice.user(&actor).unwrap().following),
            as_set(&state.user(&actor).unwrap().following)
        );
        prop_assert_eq!(
            as_set(&twice.user(&target).unwrap().followers),
            as_set(&state.user(&target).unwrap().followers)
        );
    }

    #[test]
    fn follow_graph_stays_symmetric_under_toggle_sequences(
        edges in prop::collection::vec((seed_user_id(), seed_user_id()), 0..12),
    ) {
        let mut state = seed::demo_state();
        for (actor, target) in edges {
            if actor == target {
                continue;
            }
            state = reduce(&state, Action::ToggleFollow {
                target_user_id: target,
                current_user_id: actor,
            });
        }

        assert_follow_graph_symmetric(&state);
    }

    #[test]
    fn after_one_toggle_follow_membership_matches_on_both_sides(
        actor in seed_user_id(),
        target in seed_user_id(),
    ) {
        prop_assume!(actor != target);
        let state = seed::demo_state();

        let next = reduce(&state, Action::ToggleFollow {
            target_user_id: target.clone(),
            current_user_id: actor.clone(),
        });

        let actor_follows = next.user(&actor).unwrap().is_following(&target);
        let target_has_follower = next.user(&target).unwrap().followers.contains(&actor);
        prop_assert_eq!(actor_follows, target_has_follower);
    }
}
