//! Leveled internal consistency checks.
//!
//! The level is raised when testing or when the `debug-checks` feature is enabled, so the more
//! expensive checks (e.g. re-evaluating every compiled constraint) only run when asked for.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const MAXSAT_ASSERT_LEVEL_DEFINITION: u8 = MAXSAT_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const MAXSAT_ASSERT_LEVEL_DEFINITION: u8 = MAXSAT_ASSERT_MODERATE;

pub const MAXSAT_ASSERT_SIMPLE: u8 = 1;
pub const MAXSAT_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! maxsat_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::MAXSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAXSAT_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! maxsat_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::MAXSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAXSAT_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! maxsat_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::MAXSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAXSAT_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
