//! Tests for the identifier newtypes
//!
//! Covers creation, parsing, serde behaviour and display formatting.

use core_kernel::{AssignmentId, CoreError, DealerId, WarrantyPackageId};
use uuid::Uuid;

mod assignment_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = AssignmentId::new();
        let id2 = AssignmentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = AssignmentId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let id2 = AssignmentId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(AssignmentId::prefix(), "ASG");
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: AssignmentId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("ASG-not-a-uuid".parse::<AssignmentId>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = AssignmentId::from(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}

mod external_id_tests {
    use super::*;

    #[test]
    fn test_dealer_id_display_is_raw_value() {
        let id = DealerId::new("DLR-0042").unwrap();
        assert_eq!(id.to_string(), "DLR-0042");
    }

    #[test]
    fn test_empty_dealer_id_is_invalid() {
        let err = DealerId::new("").unwrap_err();
        assert!(matches!(err, CoreError::InvalidIdentifier(_)));
        assert!(err.to_string().contains("dealer id"));
    }

    #[test]
    fn test_empty_package_id_is_invalid() {
        let err: CoreError = "".parse::<WarrantyPackageId>().unwrap_err();
        assert!(err.to_string().contains("warranty package id"));
    }

    #[test]
    fn test_deserialize_rejects_empty_string() {
        let result: Result<DealerId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id: WarrantyPackageId = serde_json::from_str("\"GOLD-36\"").unwrap();
        assert_eq!(id.as_str(), "GOLD-36");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"GOLD-36\"");
    }

    #[test]
    fn test_into_inner_round_trip() {
        let id = DealerId::new("D1").unwrap();
        let raw: String = id.clone().into();
        assert_eq!(raw, "D1");
        assert_eq!(id.into_inner(), "D1");
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_non_empty_string_is_a_dealer_id(raw in ".{1,64}") {
            let id = DealerId::new(raw.clone()).unwrap();
            prop_assert_eq!(id.as_str(), raw.as_str());
        }
    }
}
