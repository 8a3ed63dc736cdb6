//! Property-based tests for conversation keys and engagement detection
//!
//! Uses proptest to generate random inputs and verify properties

use mulberry::backend::chat::{assess, Engagement};
use mulberry::shared::messaging::{ChatMessage, ConversationKey, ConversationRecord};
use proptest::prelude::*;

fn user_id() -> impl Strategy<Value = String> {
    "[a-z]{1,8}@[a-z]{1,5}\\.io"
}

proptest! {
    #[test]
    fn test_key_is_symmetric(a in user_id(), b in user_id()) {
        prop_assume!(a != b);
        let ab = ConversationKey::resolve(&a, &b).unwrap();
        let ba = ConversationKey::resolve(&b, &a).unwrap();
        prop_assert_eq!(&ab, &ba);
        prop_assert_eq!(ConversationKey::parse(&ab.to_string()).unwrap(), ab);
    }

    #[test]
    fn test_counterpart_is_the_other_user(a in user_id(), b in user_id()) {
        prop_assume!(a != b);
        let key = ConversationKey::resolve(&a, &b).unwrap();
        prop_assert_eq!(key.counterpart(&a), Some(b.as_str()));
        prop_assert_eq!(key.counterpart(&b), Some(a.as_str()));
    }

    #[test]
    fn test_mutual_iff_both_wrote(
        a in user_id(),
        b in user_id(),
        senders in proptest::collection::vec(0u8..3, 0..12),
    ) {
        prop_assume!(a != b);
        let key = ConversationKey::resolve(&a, &b).unwrap();
        let mut record = ConversationRecord::empty(key.clone());
        for sender in &senders {
            let message = match sender {
                0 => ChatMessage::from_user(a.as_str(), "hi", None),
                1 => ChatMessage::from_user(b.as_str(), "hi", None),
                _ => ChatMessage::activity_offer(&key),
            };
            record.push(message);
        }

        let a_wrote = senders.contains(&0);
        let b_wrote = senders.contains(&1);
        let expected = match (a_wrote, b_wrote) {
            (true, true) => Engagement::Mutual,
            (false, false) => Engagement::Silent,
            _ => Engagement::OneSided,
        };
        prop_assert_eq!(assess(&record), expected);
    }

    #[test]
    fn test_last_writer_has_read(
        a in user_id(),
        b in user_id(),
        senders in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        prop_assume!(a != b);
        let key = ConversationKey::resolve(&a, &b).unwrap();
        let mut record = ConversationRecord::empty(key);
        for &from_a in &senders {
            let sender = if from_a { &a } else { &b };
            record.push(ChatMessage::from_user(sender.as_str(), "x", None));
        }

        let (last, other) = if senders[senders.len() - 1] { (&a, &b) } else { (&b, &a) };
        prop_assert_eq!(record.is_read_by(last), Some(true));
        prop_assert_eq!(record.is_read_by(other), Some(false));
    }
}
