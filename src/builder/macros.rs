//! Macros for writing transition tables.

/// Build a transition table array with the end-of-table marker appended.
///
/// Each row is `origin => dest`, optionally followed by `, when guard` and
/// `, then action`; rows are separated by `;`. The expansion is a plain
/// array expression, so it can initialize a `static`.
///
/// # Example
///
/// ```
/// use fsm_table::core::{FireResult, Fsm, Transition};
/// use fsm_table::transition_table;
///
/// fn has_coin(fsm: &Fsm<'_, u32>) -> bool {
///     *fsm.context() > 0
/// }
///
/// fn take_coin(fsm: &mut Fsm<'_, u32>) {
///     *fsm.context_mut() -= 1;
/// }
///
/// static TURNSTILE: [Transition<u32>; 3] = transition_table![
///     0 => 1, when has_coin, then take_coin;
///     1 => 0;
/// ];
///
/// let mut fsm = Fsm::new(&TURNSTILE, 1).unwrap();
/// assert_eq!(fsm.fire(), FireResult::Fired);
/// assert_eq!(*fsm.context(), 0);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            $origin:expr => $dest:expr
            $(, when $guard:expr)?
            $(, then $action:expr)?
        );* $(;)?
    ) => {
        [
            $(
                $crate::core::Transition::new(
                    $origin,
                    $crate::__table_guard!($($guard)?),
                    $dest,
                    $crate::__table_action!($($action)?),
                ),
            )*
            $crate::core::Transition::SENTINEL,
        ]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __table_guard {
    () => {
        ::core::option::Option::None
    };
    ($guard:expr) => {
        ::core::option::Option::Some($crate::core::Guard::new($guard))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __table_action {
    () => {
        ::core::option::Option::None
    };
    ($action:expr) => {
        ::core::option::Option::Some($crate::core::Action::new($action))
    };
}
