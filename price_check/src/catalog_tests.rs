//! Unit tests for the item catalog.

use super::*;
use std::io::Cursor;

mod normalize_name_tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(normalize_name("Harlequin Crest"), "harlequincrest");
    }

    #[test]
    fn strips_digits_and_punctuation() {
        assert_eq!(normalize_name("Tal Rasha's Lidless-Eye 2"), "talrashaslidlesseye");
    }

    #[test]
    fn is_idempotent() {
        for name in ["Shako", "Guillaume's Face", "  war traveler ", "", "123"] {
            let once = normalize_name(name);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn non_letters_only_gives_empty_key() {
        assert_eq!(normalize_name("12 - 34"), "");
    }
}

mod load_uniques_tests {
    use super::*;

    #[test]
    fn aliases_share_one_item() {
        let mut catalog = ItemCatalog::new();
        let added = catalog
            .load_uniques(Cursor::new("Harlequin Crest,Shako,Harle\n"))
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.alias_count(), 3);

        let by_name = catalog.lookup("harlequincrest").unwrap();
        let by_alias = catalog.lookup("shako").unwrap();
        assert_eq!(by_name, by_alias);
        assert_eq!(catalog.lookup("harle"), Some(by_name));
        assert_eq!(catalog.item(by_alias).display_name, "Harlequin Crest");
    }

    #[test]
    fn mutation_through_one_alias_is_visible_through_all() {
        let mut catalog = ItemCatalog::new();
        catalog.load_uniques(Cursor::new("A,B,C\n")).unwrap();

        let b = catalog.lookup("b").unwrap();
        catalog.item_mut(b).record_price(24);

        for key in ["a", "b", "c"] {
            let item = catalog.item(catalog.lookup(key).unwrap());
            assert_eq!(item.display_name, "A");
            assert_eq!(item.price_distribution.get(&24), Some(&1));
        }
    }

    #[test]
    fn display_name_is_trimmed() {
        let mut catalog = ItemCatalog::new();
        catalog.load_uniques(Cursor::new("  Shako , harlequin crest\n")).unwrap();
        let id = catalog.lookup("shako").unwrap();
        assert_eq!(catalog.item(id).display_name, "Shako");
    }

    #[test]
    fn blank_lines_are_skipped_and_loading_continues() {
        let mut catalog = ItemCatalog::new();
        let added = catalog
            .load_uniques(Cursor::new("Shako\n\n   \nArachnid Mesh,spider belt\n"))
            .unwrap();
        assert_eq!(added, 2);
        assert!(catalog.lookup("shako").is_some());
        assert!(catalog.lookup("spiderbelt").is_some());
    }

    #[test]
    fn empty_aliases_inside_a_line_are_ignored() {
        let mut catalog = ItemCatalog::new();
        catalog.load_uniques(Cursor::new("Shako,,42,\n")).unwrap();
        assert_eq!(catalog.alias_count(), 1);
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn leading_empty_alias_does_not_become_display_name() {
        let mut catalog = ItemCatalog::new();
        catalog.load_uniques(Cursor::new(",Shako, harlequin crest\n")).unwrap();

        let id = catalog.lookup("harlequincrest").unwrap();
        assert_eq!(catalog.item(id).display_name, "Shako");
        assert_eq!(catalog.lookup("shako"), Some(id));
    }

    #[test]
    fn invalid_utf8_line_does_not_stop_loading() {
        let mut catalog = ItemCatalog::new();
        let added = catalog
            .load_uniques(Cursor::new(b"Guillaume\xe9s Face,gface\nShako\n".to_vec()))
            .unwrap();

        assert_eq!(added, 2);
        assert!(catalog.lookup("gface").is_some());
        assert!(catalog.lookup("shako").is_some());
    }

    #[test]
    fn empty_source_adds_nothing() {
        let mut catalog = ItemCatalog::new();
        assert_eq!(catalog.load_uniques(Cursor::new("")).unwrap(), 0);
        assert!(catalog.is_empty());
    }
}

mod load_sets_tests {
    use super::*;

    #[test]
    fn each_line_is_its_own_alias() {
        let mut catalog = ItemCatalog::new();
        let added = catalog
            .load_sets(Cursor::new("Tal Rasha's Guardianship\nImmortal King's Will\n"))
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(catalog.alias_count(), 2);

        let id = catalog.lookup("talrashasguardianship").unwrap();
        assert_eq!(catalog.item(id).display_name, "Tal Rasha's Guardianship");
    }

    #[test]
    fn invalid_utf8_set_name_is_loaded_lossily() {
        let mut catalog = ItemCatalog::new();
        let added = catalog
            .load_sets(Cursor::new(b"Natalya\xe9s Mark\nAldur's Advance\n".to_vec()))
            .unwrap();

        assert_eq!(added, 2);
        assert!(catalog.lookup("natalyasmark").is_some());
        assert!(catalog.lookup("aldursadvance").is_some());
    }

    #[test]
    fn commas_are_not_alias_separators() {
        let mut catalog = ItemCatalog::new();
        catalog.load_sets(Cursor::new("Sigon's Gage, Left\n")).unwrap();
        assert_eq!(catalog.alias_count(), 1);
        assert!(catalog.lookup("sigonsgageleft").is_some());
    }
}

mod overwrite_tests {
    use super::*;

    #[test]
    fn later_entry_wins_for_shared_key() {
        let mut catalog = ItemCatalog::new();
        catalog.load_uniques(Cursor::new("First,dup\n")).unwrap();
        catalog.load_sets(Cursor::new("Dup\n")).unwrap();

        let id = catalog.lookup("dup").unwrap();
        assert_eq!(catalog.item(id).display_name, "Dup");
        // The first item is still reachable through its other alias
        let first = catalog.lookup("first").unwrap();
        assert_ne!(first, id);
        assert_eq!(catalog.len(), 2);
    }
}

mod item_tests {
    use super::*;

    #[test]
    fn record_price_inserts_then_increments() {
        let mut item = Item::new("Shako");
        assert!(!item.has_prices());

        item.record_price(24);
        item.record_price(24);
        item.record_price(30);

        assert!(item.has_prices());
        assert_eq!(item.price_distribution.get(&24), Some(&2));
        assert_eq!(item.price_distribution.get(&30), Some(&1));
        assert_eq!(item.price_distribution.len(), 2);
    }

    #[test]
    fn counts_go_past_u32_range() {
        let mut item = Item::new("Shako");
        item.price_distribution.insert(24, u64::from(u32::MAX));

        item.record_price(24);

        assert_eq!(
            item.price_distribution.get(&24),
            Some(&(u64::from(u32::MAX) + 1))
        );
    }
}
