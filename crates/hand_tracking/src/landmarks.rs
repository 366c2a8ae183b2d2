use serde::{Deserialize, Serialize};

pub const LANDMARK_COUNT: usize = 21;

pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

/// A hand keypoint in normalized image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
	pub x: f64,
	pub y: f64,
}

impl Landmark {
	#[must_use]
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// The 21 landmarks of a single detected hand, in the detector's index order.
#[derive(Clone, Debug, PartialEq)]
pub struct HandObservation {
	landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandObservation {
	#[must_use]
	pub const fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
		Self { landmarks }
	}

	#[must_use]
	pub const fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
		&self.landmarks
	}

	#[must_use]
	pub const fn landmark(&self, index: usize) -> Landmark {
		self.landmarks[index]
	}

	#[must_use]
	pub fn distance(&self, from: usize, to: usize) -> f64 {
		distance(&self.landmarks, from, to)
	}
}

impl TryFrom<Vec<Landmark>> for HandObservation {
	type Error = InvalidObservation;

	fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
		let count = landmarks.len();
		let landmarks: [Landmark; LANDMARK_COUNT] = landmarks
			.try_into()
			.map_err(|_| InvalidObservation::new(format!("expected {LANDMARK_COUNT} landmarks, got {count}")))?;
		Ok(Self { landmarks })
	}
}

#[derive(Debug)]
pub struct InvalidObservation {
	message: String,
}

impl InvalidObservation {
	fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}

impl std::fmt::Display for InvalidObservation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for InvalidObservation {}

/// Planar Euclidean distance between two landmarks.
///
/// Indices must be valid for `landmarks`; an out-of-range index is a caller bug and panics.
#[must_use]
pub fn distance(landmarks: &[Landmark], from: usize, to: usize) -> f64 {
	let a = landmarks[from];
	let b = landmarks[to];
	(b.x - a.x).hypot(b.y - a.y)
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use proptest::prelude::*;

	/// Builds a hand with every landmark at the centre, then moves the given ones.
	pub(crate) fn hand_with(points: &[(usize, f64, f64)]) -> HandObservation {
		let mut landmarks = [Landmark::new(0.5, 0.5); LANDMARK_COUNT];
		for &(index, x, y) in points {
			landmarks[index] = Landmark::new(x, y);
		}
		HandObservation::new(landmarks)
	}

	#[test]
	fn distance_is_euclidean() {
		let hand = hand_with(&[(THUMB_TIP, 0.1, 0.1), (INDEX_TIP, 0.4, 0.5)]);
		assert!((hand.distance(THUMB_TIP, INDEX_TIP) - 0.5).abs() < 1e-12);
	}

	#[test]
	fn rejects_wrong_landmark_count() {
		let error = HandObservation::try_from(vec![Landmark::default(); 20]).unwrap_err();
		assert_eq!(error.to_string(), "expected 21 landmarks, got 20");

		assert!(HandObservation::try_from(vec![Landmark::default(); 22]).is_err());
		assert!(HandObservation::try_from(vec![Landmark::default(); LANDMARK_COUNT]).is_ok());
	}

	#[test]
	fn landmark_deserializes_from_object() {
		let landmark: Landmark = serde_json::from_str(r#"{"x":0.25,"y":0.75}"#).unwrap();
		assert_eq!(landmark, Landmark::new(0.25, 0.75));
	}

	proptest! {
		#[test]
		fn distance_to_self_is_zero(x in 0.0..=1.0f64, y in 0.0..=1.0f64) {
			let landmarks = [Landmark::new(x, y)];
			prop_assert_eq!(distance(&landmarks, 0, 0), 0.0);
		}

		#[test]
		fn distance_is_symmetric(ax in 0.0..=1.0f64, ay in 0.0..=1.0f64, bx in 0.0..=1.0f64, by in 0.0..=1.0f64) {
			let landmarks = [Landmark::new(ax, ay), Landmark::new(bx, by)];
			let forward = distance(&landmarks, 0, 1);
			prop_assert_eq!(forward, distance(&landmarks, 1, 0));
			prop_assert!(forward >= 0.0);
			prop_assert!(forward <= std::f64::consts::SQRT_2 + 1e-12);
		}
	}
}
