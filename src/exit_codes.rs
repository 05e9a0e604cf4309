//! Exit code constants for the nichepost CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, unusable working directory)
//! - 2: Write failure (output directory or post file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an environment the generator cannot work in.
pub const USER_ERROR: i32 = 1;

/// Write failure: creating the output directory or writing the post failed.
pub const WRITE_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, WRITE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
