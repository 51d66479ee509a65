pub mod dialogue;
pub mod landing;
pub mod login;
pub mod result;
pub mod shared;
pub mod signup;
pub mod token;

pub use dialogue::DialogueView;
pub use landing::LandingView;
pub use login::LoginView;
pub use signup::SignupView;
pub use token::TokenView;
