// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable proptest strategies for property-based testing.

use proptest::prelude::*;

/// Well-formed employee ids.
pub fn employee_id_strategy() -> impl Strategy<Value = u64> {
    1u64..100_000
}

/// Integers that parse but fall below the minimum.
pub fn non_positive_id_strategy() -> impl Strategy<Value = String> {
    (i64::MIN..=0i64).prop_map(|n| n.to_string())
}

/// Non-blank text that is not an integer.
pub fn non_numeric_id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 .-]{0,11}"
}

/// Display names.
pub fn display_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,9} [A-Z][a-z]{1,11}"
}

/// Email addresses accepted by the form.
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{3,10}", "[a-z]{2,8}", "[a-z]{2,4}")
        .prop_map(|(user, domain, tld)| format!("{}@{}.{}", user, domain, tld))
}

/// Phone numbers in loose human formatting.
pub fn phone_strategy() -> impl Strategy<Value = String> {
    ("[0-9]{2,3}", "[0-9]{3}", "[0-9]{4}")
        .prop_map(|(a, b, c)| format!("+{} ({}) {}", a, b, c))
}

/// A set of distinct employee ids already in the directory.
pub fn directory_ids_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::btree_set(employee_id_strategy(), 1..12)
        .prop_map(|set| set.into_iter().collect())
}
