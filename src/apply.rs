//! Absence-aware application over a plain `Option`, without the [`crate::Maybe`] wrapper.

/// Applies `transform` when `input` holds a value, forwards `None` otherwise.
///
/// `transform` is not called for `None`.
pub fn conditional_apply<T, U, F>(input: Option<T>, transform: F) -> Option<U>
where
    F: FnOnce(T) -> U,
{
    input.map(transform)
}

/// Builds a reusable absence-aware version of `transform`.
///
/// The returned function is `|x| conditional_apply(x, &transform)`, so lifted
/// functions compose the same way nested [`conditional_apply`] calls do.
pub fn lift_to_optional<T, U, F>(transform: F) -> impl Fn(Option<T>) -> Option<U>
where
    F: Fn(T) -> U,
{
    move |input| conditional_apply(input, &transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn square(x: i64) -> i64 {
        x * x
    }

    fn to_string(x: i64) -> String {
        format!("{x}")
    }

    #[test]
    fn present_input_is_transformed() {
        assert_eq!(conditional_apply(Some(3), square), Some(9));
        assert_eq!(conditional_apply(Some(0), to_string), Some("0".to_string()));
    }

    #[test]
    fn absent_input_skips_transform() {
        let calls = Cell::new(0);
        let out = conditional_apply(None::<i64>, |x| {
            calls.set(calls.get() + 1);
            x
        });

        assert_eq!(out, None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn falsy_result_stays_present() {
        assert_eq!(conditional_apply(Some(5), |_| 0), Some(0));
        assert_eq!(conditional_apply(Some("x"), |_| String::new()), Some(String::new()));
    }

    #[test]
    fn nesting_matches_sequential_steps() {
        for input in [Some(-3), Some(0), Some(7), None] {
            let nested = conditional_apply(conditional_apply(input, square), to_string);
            let step = conditional_apply(input, square);
            let sequential = conditional_apply(step, to_string);
            let fused = conditional_apply(input, |x| to_string(square(x)));

            assert_eq!(nested, sequential);
            assert_eq!(nested, fused);
        }
    }

    #[test]
    fn lifting_distributes_over_composition() {
        let lifted_square = lift_to_optional(square);
        let lifted_to_string = lift_to_optional(to_string);

        for input in [Some(-3), Some(0), Some(7), None] {
            assert_eq!(
                lifted_to_string(lifted_square(input)),
                conditional_apply(conditional_apply(input, square), to_string),
            );
        }
    }

    #[test]
    fn lifted_function_is_reusable() {
        let calls = Cell::new(0);
        let counted = lift_to_optional(|x: i64| {
            calls.set(calls.get() + 1);
            x + 1
        });

        assert_eq!(counted(Some(1)), Some(2));
        assert_eq!(counted(None), None);
        assert_eq!(counted(Some(41)), Some(42));
        assert_eq!(calls.get(), 2);
    }
}
