pub mod activity;
pub mod camper;
pub mod signup;

pub use activity::Activity;
pub use camper::{Camper, CamperChanges, NewCamper};
pub use signup::{NewSignup, Signup, SignupDetail};
