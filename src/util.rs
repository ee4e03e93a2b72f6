/// Strip the module path and generic arguments from a full type name.
///
/// `my_crate::shapes::RectangleTest<u8>` becomes `RectangleTest`.
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

pub(crate) fn short_name_of<T: ?Sized>() -> &'static str {
    short_type_name(std::any::type_name::<T>())
}
