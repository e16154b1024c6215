//! Partial-update merge
//!
//! The API replaces a resource with whatever fields an update carries, so an
//! update payload starts as a copy of the fetched resource and only the
//! fields the user asked to change are overwritten.

/// Replace `field` when the user supplied a value for it.
pub fn overlay<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// A set of user-supplied overrides for one resource type.
pub trait Overrides {
    /// The update body sent to the API
    type Payload;

    /// Overwrite the supplied fields of `payload`, in flag declaration order.
    fn apply(self, payload: &mut Self::Payload);
}

/// Build the update payload for `snapshot` with `overrides` applied.
pub fn merge<S, O>(snapshot: &S, overrides: O) -> O::Payload
where
    O: Overrides,
    for<'a> O::Payload: From<&'a S>,
{
    let mut payload = O::Payload::from(snapshot);
    overrides.apply(&mut payload);
    payload
}
