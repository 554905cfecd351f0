use crate::normalize_email;

use googletest::prelude::*;

#[test]
fn given_mixed_case_email_when_normalized_then_lowercased() {
    assert_that!(
        normalize_email("Test.Admin@Example.COM").as_str(),
        eq("test.admin@example.com")
    );
}

#[test]
fn given_padded_email_when_normalized_then_whitespace_kept() {
    assert_that!(
        normalize_email(" Test.Admin@example.com ").as_str(),
        eq(" test.admin@example.com ")
    );
}
