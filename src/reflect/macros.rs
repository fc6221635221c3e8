/// Implements [`Reflect`](crate::Reflect) and [`Record`](crate::Record) for a
/// struct by listing the fields a path may address.
///
/// A field is addressed by its Rust name unless an alias is given with
/// `"Alias" => field`. Fields listed in the optional `readonly` block can be
/// read but not written.
///
/// # Example
///
/// ```
/// use pathval::{impl_record, get, Path};
///
/// struct Member {
///     name: String,
///     age: u8,
/// }
///
/// impl_record!(Member { "Name" => name, age });
///
/// let member = Member { name: "Alice".to_string(), age: 30 };
/// let name: Option<&str> = get(&member, &Path::parse("Name").unwrap());
/// assert_eq!(name, Some("Alice"));
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $ty:ty {
            $( $($alias:literal =>)? $field:ident ),* $(,)?
        }
        $( readonly {
            $( $($ro_alias:literal =>)? $ro_field:ident ),* $(,)?
        } )?
    ) => {
        impl $crate::reflect::Record for $ty {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn $crate::reflect::Reflect> {
                $(
                    if name == $crate::__record_field_name!($($alias)? ; $field) {
                        return ::core::option::Option::Some(
                            &self.$field as &dyn $crate::reflect::Reflect,
                        );
                    }
                )*
                $($(
                    if name == $crate::__record_field_name!($($ro_alias)? ; $ro_field) {
                        return ::core::option::Option::Some(
                            &self.$ro_field as &dyn $crate::reflect::Reflect,
                        );
                    }
                )*)?
                ::core::option::Option::None
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn $crate::reflect::Reflect> {
                $(
                    if name == $crate::__record_field_name!($($alias)? ; $field) {
                        return ::core::option::Option::Some(
                            &mut self.$field as &mut dyn $crate::reflect::Reflect,
                        );
                    }
                )*
                let _ = name;
                ::core::option::Option::None
            }

            fn field_names(&self) -> ::std::vec::Vec<&str> {
                ::std::vec![
                    $( $crate::__record_field_name!($($alias)? ; $field), )*
                    $($( $crate::__record_field_name!($($ro_alias)? ; $ro_field), )*)?
                ]
            }
        }

        impl $crate::reflect::Reflect for $ty {
            fn reflect_ref(&self) -> $crate::reflect::ReflectRef<'_> {
                $crate::reflect::ReflectRef::Record(self)
            }

            fn reflect_mut(&mut self) -> $crate::reflect::ReflectMut<'_> {
                $crate::reflect::ReflectMut::Record(self)
            }

            fn assign(
                &mut self,
                value: ::std::boxed::Box<dyn ::std::any::Any>,
            ) -> ::core::result::Result<(), ::std::boxed::Box<dyn ::std::any::Any>> {
                $crate::reflect::assign_downcast(self, value)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn type_name(&self) -> &'static str {
                ::std::any::type_name::<$ty>()
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_field_name {
    ($alias:literal ; $field:ident) => {
        $alias
    };
    (; $field:ident) => {
        ::core::stringify!($field)
    };
}
