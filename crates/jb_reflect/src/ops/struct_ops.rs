use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::info::NamedField;
use crate::ops::AssignError;

/// A composite value with named fields.
///
/// Both methods see the flattened field set: a type that extends a base
/// forwards names it does not declare itself to the base.
///
/// ```rust
/// use jb_reflect::prelude::*;
///
/// #[derive(Reflect, Default)]
/// struct Account {
///     #[reflect(rename = "userName")]
///     user_name: String,
///     #[reflect(validate = positive)]
///     balance: i64,
/// }
///
/// fn positive(value: &i64) -> Result<(), &'static str> {
///     if *value >= 0 { Ok(()) } else { Err("balance must not be negative") }
/// }
///
/// let mut account = Account::default();
/// account.set_field("userName", Box::new(String::from("ana"))).unwrap();
/// assert_eq!(account.user_name, "ana");
///
/// let err = account.set_field("balance", Box::new(-5_i64)).unwrap_err();
/// assert_eq!(err, AssignError::rejected("balance must not be negative"));
///
/// let err = account.set_field("balance", Box::new(5_u8)).unwrap_err();
/// assert!(matches!(err, AssignError::MismatchedType { .. }));
///
/// assert_eq!(account.field("userName").unwrap().downcast_ref::<String>().unwrap(), "ana");
/// ```
pub trait Struct: Reflect {
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Assigns a converted value to the field named `name`.
    ///
    /// The value must be the field's type or, for optional and boxed fields,
    /// its inner type.
    fn set_field(&mut self, name: &str, value: Box<dyn Reflect>) -> Result<(), AssignError>;

    /// The flattened field names, from this type's descriptor.
    fn field_names(&self) -> Vec<&'static str> {
        self.reflect_type_info()
            .as_composite()
            .map(|info| info.fields().iter().map(NamedField::name).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    #[derive(Reflect, Default)]
    struct Entity {
        id: u64,
        name: String,
    }

    #[derive(Reflect, Default)]
    #[reflect(rename_all = "camelCase")]
    struct Player {
        display_name: String,
        nick: Option<String>,
        #[reflect(skip)]
        session: Vec<u8>,
        #[reflect(base)]
        entity: Entity,
    }

    #[test]
    fn flattened_fields() {
        let player = Player::default();
        assert_eq!(player.field_names(), ["displayName", "nick", "id", "name"]);
        assert!(player.field("session").is_none());
        assert!(player.field("entity").is_none());
        assert!(player.field("id").unwrap().is::<u64>());
    }

    #[test]
    fn assignment_forwards_to_base() {
        let mut player = Player::default();
        player.set_field("id", Box::new(7_u64)).unwrap();
        player
            .set_field("nick", Box::new(String::from("ace")))
            .unwrap();
        assert_eq!(player.entity.id, 7);
        assert_eq!(player.nick.as_deref(), Some("ace"));
        assert!(player.session.is_empty());

        let err = player.set_field("missing", Box::new(1_u8)).unwrap_err();
        assert_eq!(err, AssignError::unknown_field("missing"));
    }

    #[test]
    fn optional_field_accepts_wrapped_value() {
        let mut player = Player::default();
        player
            .set_field("nick", Box::new(Some(String::from("b"))))
            .unwrap();
        assert_eq!(player.nick.as_deref(), Some("b"));

        let err = player.set_field("nick", Box::new(3_i32)).unwrap_err();
        assert!(matches!(err, AssignError::MismatchedType { .. }));
    }

    #[test]
    fn generic_struct() {
        #[derive(Reflect, Default)]
        struct Page<T> {
            items: Vec<T>,
            total: usize,
        }

        let info = <Page<u8>>::type_info().as_composite().unwrap();
        assert_eq!(info.field_names().collect::<Vec<_>>(), ["items", "total"]);
        assert!(info.field("items").unwrap().type_info().is::<Vec<u8>>());
        assert!(!core::ptr::eq(
            <Page<u8>>::type_info(),
            <Page<i8>>::type_info()
        ));

        let mut page = Page::<i8>::default();
        page.set_field("items", Box::new(Vec::from([1_i8, 2])))
            .unwrap();
        assert_eq!(page.items, [1, 2]);
    }

    #[test]
    fn opaque_kinds() {
        #[derive(Reflect)]
        struct Meters(f64);

        #[derive(Reflect, Default)]
        #[reflect(opaque)]
        struct Handle {
            _raw: usize,
        }

        assert!(Meters::type_info().capabilities().is_empty());
        assert!(Handle::type_info().capabilities().is_empty());
        assert!(matches!(Meters(1.0).reflect_ref(), ReflectRef::Opaque(_)));
    }
}
