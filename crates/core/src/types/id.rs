//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs in the app data
//! document are strings, so the wrappers hold a `String`.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use apa_core::define_id;
/// define_id!(AisleId);
/// define_id!(ShelfId);
///
/// let aisle = AisleId::new("1");
/// let shelf = ShelfId::new("1");
///
/// // These are different types, so this won't compile:
/// // let _: AisleId = shelf;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(SavedCartId);

impl SavedCartId {
    /// Numeric value used when assigning the next ID.
    ///
    /// IDs that do not parse as an integer count as `0`.
    #[must_use]
    pub fn numeric_value(&self) -> i64 {
        self.0.trim().parse().unwrap_or(0)
    }

    /// The ID that follows every ID in `existing`: `max(numeric) + 1`.
    ///
    /// Returns `"1"` when `existing` is empty.
    ///
    /// ```rust
    /// # use apa_core::SavedCartId;
    /// let ids = [SavedCartId::new("1"), SavedCartId::new("3"), SavedCartId::new("7")];
    /// assert_eq!(SavedCartId::next_after(ids.iter()).as_str(), "8");
    /// ```
    #[must_use]
    pub fn next_after<'a>(existing: impl IntoIterator<Item = &'a Self>) -> Self {
        let max = existing
            .into_iter()
            .map(Self::numeric_value)
            .max()
            .unwrap_or(0);
        Self(max.saturating_add(1).to_string())
    }
}
