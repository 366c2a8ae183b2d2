use serde::Serialize;

use crate::landmarks::HandObservation;

/// Bones drawn between landmark indices, matching the detector's hand topology.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
	(0, 1),
	(1, 2),
	(2, 3),
	(3, 4),
	(0, 5),
	(5, 6),
	(6, 7),
	(7, 8),
	(5, 9),
	(9, 10),
	(10, 11),
	(11, 12),
	(9, 13),
	(13, 14),
	(14, 15),
	(15, 16),
	(13, 17),
	(0, 17),
	(17, 18),
	(18, 19),
	(19, 20),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PixelPoint {
	pub x: i32,
	pub y: i32,
}

/// Landmarks projected onto the video frame for drawing. Purely cosmetic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Overlay {
	pub width: u32,
	pub height: u32,
	pub points: Vec<PixelPoint>,
	pub segments: Vec<(PixelPoint, PixelPoint)>,
}

impl Overlay {
	#[must_use]
	pub fn project(observation: &HandObservation, width: u32, height: u32) -> Self {
		let points: Vec<PixelPoint> = observation
			.landmarks()
			.iter()
			.map(|landmark| PixelPoint {
				x: (landmark.x * f64::from(width)).round() as i32,
				y: (landmark.y * f64::from(height)).round() as i32,
			})
			.collect();

		let segments = HAND_CONNECTIONS.iter().map(|&(from, to)| (points[from], points[to])).collect();

		Self { width, height, points, segments }
	}
}
