// register_model
/// Register an [`EntityKind`](crate::traits::EntityKind) implementor's model
/// with the global registry at process start.
#[macro_export]
macro_rules! register_model {
    ($ty:path) => {
        const _: () = {
            #[$crate::__reexports::ctor::ctor(unsafe, anonymous, crate_path = $crate::__reexports::ctor)]
            fn __register_model() {
                $crate::registry::register_global(
                    <$ty as $crate::traits::EntityKind>::MODEL,
                )
                .expect("entity model registration failed");
            }
        };
    };
}
