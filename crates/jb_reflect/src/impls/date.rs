use crate::impls::NonGenericTypeInfoCell;
use crate::info::{TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::value::Date;
use crate::{FromReflect, Reflect};

impl Typed for Date {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::new::<Self>().with_date())
    }
}

impl Reflect for Date {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Date(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Other(self)
    }
}

impl FromReflect for Date {}
