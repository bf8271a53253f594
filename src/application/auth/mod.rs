pub mod authenticate;

pub use authenticate::AuthenticateUseCase;
