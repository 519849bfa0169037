//! Traits for converting from parsed font data to their owned equivalents

use read::FontData;
use types::{BigEndian, Scalar};

/// A trait for types that can fully resolve themselves.
///
/// The tables handled by this crate hold no offsets, so conversion never
/// needs data beyond the table itself.
pub trait FromTableRef<T>: FromObjRef<T> {
    fn from_table_ref(from: &T) -> Self {
        let data = FontData::new(&[]);
        Self::from_obj_ref(from, data)
    }
}

/// A trait for types that can be built from a parsed object, given the data
/// the object was parsed from.
pub trait FromObjRef<T: ?Sized>: Sized {
    /// Convert `from` to an instance of `Self`.
    fn from_obj_ref(from: &T, data: FontData) -> Self;
}

/// A conversion from a parsed font object type to an owned version.
///
/// You should avoid implementing this trait manually. Like [`std::convert::Into`],
/// it is provided as a blanket impl when you implement [`FromObjRef<T>`].
pub trait ToOwnedObj<T> {
    /// Convert this type into `T`.
    fn to_owned_obj(&self, data: FontData) -> T;
}

/// A conversion from a parsed font table to its owned equivalent.
///
/// As with [`ToOwnedObj`], you should not need to implement this manually.
pub trait ToOwnedTable<T>: ToOwnedObj<T> {
    fn to_owned_table(&self) -> T;
}

impl<U, T> ToOwnedObj<U> for T
where
    U: FromObjRef<T>,
{
    fn to_owned_obj(&self, data: FontData) -> U {
        U::from_obj_ref(self, data)
    }
}

impl<U, T> ToOwnedTable<U> for T
where
    U: FromTableRef<T>,
{
    fn to_owned_table(&self) -> U {
        U::from_table_ref(self)
    }
}

// blanket impls for converting raw big-endian values to their native types
impl<T: Scalar> FromObjRef<BigEndian<T>> for T {
    fn from_obj_ref(from: &BigEndian<T>, _: FontData) -> Self {
        from.get()
    }
}

// arrays of records or scalars become vecs of their owned equivalents
impl<T, U> FromObjRef<&[U]> for Vec<T>
where
    T: FromObjRef<U>,
{
    fn from_obj_ref(from: &&[U], data: FontData) -> Self {
        from.iter().map(|item| item.to_owned_obj(data)).collect()
    }
}
