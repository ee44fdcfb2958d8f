mod collection;

use proc_macro::TokenStream;

/// Derive macro for the `Collection` trait.
///
/// Binds a record type to the storage key its whole collection is persisted
/// under, and to the field that identifies a record within that collection.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Collection)]
/// #[collection(key = "maj_surveyors_db")]
/// pub struct Surveyor {
///     #[collection(id)]
///     pub id: String,
///     pub name: String,
/// }
/// ```
///
/// A collection that should start with records when nothing is stored yet
/// names a seed function returning `Vec<Self>`:
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Collection)]
/// #[collection(key = "maj_classes_db", seed = default_societies)]
/// pub struct ClassSocietyData { /* ... */ }
/// ```
///
/// Without `key`, the key defaults to the snake_case type name plus `s`.
/// Without `#[collection(id)]`, a field named `id` is used.
#[proc_macro_derive(Collection, attributes(collection))]
pub fn derive_collection(input: TokenStream) -> TokenStream {
    collection::derive_collection(input)
}
