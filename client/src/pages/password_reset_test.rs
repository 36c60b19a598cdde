use super::*;

#[test]
fn each_step_has_its_own_heading() {
    assert_eq!(ResetStep::Request.heading(), "Reset Password");
    assert_eq!(ResetStep::Verify.heading(), "Enter Reset Code");
    assert_eq!(ResetStep::Set.heading(), "Set New Password");
}

#[test]
fn submit_labels_match_step() {
    assert_eq!(ResetStep::Request.submit_label(), "Send Verification Code");
    assert_eq!(ResetStep::Set.submit_label(), "Reset Password");
    assert_eq!(ResetStep::Set.subtitle(), "Enter your new password to complete reset");
}
