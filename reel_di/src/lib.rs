//! Compile time dependency injection.
//!
//! A [`Provider`] owns the leaf values of the dependency graph (configs,
//! connections, ...). Every other service derives [`Build`] and is assembled
//! from its fields on demand. Built services are cached in the provider, so
//! each type is constructed at most once per provider.

#[cfg(test)]
extern crate self as reel_di;

pub use reel_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    /// The cache of already built services.
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provide: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provide for P {}
