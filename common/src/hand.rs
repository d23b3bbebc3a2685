pub mod frame;
pub mod joint;

pub use frame::{HandPose, Landmark, LandmarkFrame, Point};
pub use joint::{JOINT_COUNT, Joint};
