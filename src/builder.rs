//! Builder macro for configuration types.

/// Generate a builder struct and implementation for a configuration type.
///
/// The configuration type must implement `Default`. The macro generates:
/// - A builder struct with all fields wrapped in `Option`
/// - Setter methods for each field (all accept `impl Into<T>`)
/// - A `build()` method that fills unset fields from `Default` and checks
///   the fields listed under `non_empty`
/// - A `builder()` method on the config type
///
/// `non_empty` fields must have an `is_empty()` method; `build()` fails
/// with [`BuilderError::EmptyField`](crate::error::BuilderError::EmptyField)
/// when one is empty after defaults are applied.
macro_rules! impl_builder {
    (
        $Config:ident, $Builder:ident {
            optional { $( $opt_field:ident : $opt_ty:ty ),* $(,)? }
            non_empty { $( $ne_field:ident ),* $(,)? }
        }
    ) => {
        #[derive(Debug, Default)]
        pub struct $Builder {
            $( $opt_field: Option<$opt_ty>, )*
        }

        impl $Config {
            pub fn builder() -> $Builder {
                $Builder::default()
            }
        }

        impl $Builder {
            $(
                pub fn $opt_field(mut self, value: impl Into<$opt_ty>) -> Self {
                    self.$opt_field = Some(value.into());
                    self
                }
            )*

            pub fn build(self) -> Result<$Config, $crate::error::BuilderError> {
                let defaults = $Config::default();
                let config = $Config {
                    $( $opt_field: self.$opt_field.unwrap_or(defaults.$opt_field), )*
                };
                $(
                    if config.$ne_field.is_empty() {
                        return Err($crate::error::BuilderError::EmptyField {
                            builder: stringify!($Builder),
                            field: stringify!($ne_field),
                        });
                    }
                )*
                Ok(config)
            }
        }
    };
}

pub(crate) use impl_builder;
