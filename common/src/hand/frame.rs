//! # Landmark Frames
//!
//! A [`LandmarkFrame`] is one pose-estimation result for a single hand: a sparse
//! mapping from [`Joint`] to a normalized position plus the estimator's
//! confidence. Frames are plain data, produced fresh for every camera frame and
//! read-only to the classifier.
//!
//! **Coordinate convention:** `x` and `y` are normalized to `[0, 1]` with the
//! origin at the lower-left corner of the camera frame, so `y` grows upward.
//! Renderers with a top-left origin should go through
//! [`LandmarkFrame::display_points`], which is the only place `y` is flipped.

use super::joint::{JOINT_COUNT, Joint};

/// A 2D position in normalized frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One observed joint: position plus detection confidence in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub confidence: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self { x, y, confidence }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Sparse per-frame mapping from joint to landmark.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandmarkFrame {
    landmarks: [Option<Landmark>; JOINT_COUNT],
}

impl LandmarkFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the landmark for `joint`.
    pub fn insert(&mut self, joint: Joint, landmark: Landmark) -> Option<Landmark> {
        self.landmarks[joint.index()].replace(landmark)
    }

    pub fn with(mut self, joint: Joint, landmark: Landmark) -> Self {
        self.insert(joint, landmark);
        self
    }

    pub fn get(&self, joint: Joint) -> Option<&Landmark> {
        self.landmarks[joint.index()].as_ref()
    }

    /// Number of joints present, regardless of confidence.
    pub fn len(&self) -> usize {
        self.landmarks.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.iter().all(Option::is_none)
    }

    /// Present joints in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Joint, &Landmark)> {
        Joint::ALL
            .into_iter()
            .zip(self.landmarks.iter())
            .filter_map(|(joint, landmark)| landmark.as_ref().map(|l| (joint, l)))
    }

    /// Mutable access to every present landmark.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Joint, &mut Landmark)> {
        Joint::ALL
            .into_iter()
            .zip(self.landmarks.iter_mut())
            .filter_map(|(joint, landmark)| landmark.as_mut().map(|l| (joint, l)))
    }

    /// Points for a top-left-origin renderer (`y` flipped to `1 - y`).
    pub fn display_points(&self) -> Vec<(Joint, Point)> {
        self.iter()
            .map(|(joint, landmark)| (joint, Point::new(landmark.x, 1.0 - landmark.y)))
            .collect()
    }

    /// A confidence-gated view of this frame.
    pub fn pose(&self, confidence_threshold: f64) -> HandPose<'_> {
        HandPose {
            frame: self,
            confidence_threshold,
        }
    }
}

impl FromIterator<(Joint, Landmark)> for LandmarkFrame {
    fn from_iter<I: IntoIterator<Item = (Joint, Landmark)>>(iter: I) -> Self {
        let mut frame = LandmarkFrame::new();
        for (joint, landmark) in iter {
            frame.insert(joint, landmark);
        }
        frame
    }
}

/// Read-only view of a [`LandmarkFrame`] that hides low-confidence joints.
///
/// A landmark is visible only when its confidence is strictly greater than the
/// threshold; everything else reads as absent.
#[derive(Debug, Clone, Copy)]
pub struct HandPose<'a> {
    frame: &'a LandmarkFrame,
    confidence_threshold: f64,
}

impl<'a> HandPose<'a> {
    pub fn point(&self, joint: Joint) -> Option<Point> {
        self.frame
            .get(joint)
            .filter(|landmark| landmark.confidence > self.confidence_threshold)
            .map(Landmark::point)
    }

    /// Looks up every joint in `joints`, or `None` if any of them is absent.
    pub fn require<const N: usize>(&self, joints: [Joint; N]) -> Option<[Point; N]> {
        let mut points = [Point::default(); N];
        for (slot, joint) in points.iter_mut().zip(joints) {
            *slot = self.point(joint)?;
        }
        Some(points)
    }

    /// Number of joints that pass the confidence gate.
    pub fn confident_count(&self) -> usize {
        Joint::ALL
            .into_iter()
            .filter(|joint| self.point(*joint).is_some())
            .count()
    }

    pub fn frame(&self) -> &'a LandmarkFrame {
        self.frame
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
