// Shapes are defined as fractions of the icon side so every size shares one design.

const BOLT: [(f64, f64); 6] = [
    (0.4, 0.1),
    (0.5, 0.4),
    (0.35, 0.4),
    (0.45, 0.7),
    (0.6, 0.3),
    (0.5, 0.3),
];

const CALENDAR_MIN: (f64, f64) = (0.2, 0.6);
const CALENDAR_MAX: (f64, f64) = (0.8, 0.9);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn rounded(self) -> Self {
        Self { x: self.x.round(), y: self.y.round() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

/// Scaled drawing geometry for one icon size.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub bolt: [Point; 6],
    pub calendar: Bounds,
    pub stroke: u32,
}

impl Geometry {
    pub fn for_size(size: u32) -> Self {
        let s = size as f64;
        let scale = |(fx, fy): (f64, f64)| Point { x: s * fx, y: s * fy };
        Self {
            bolt: BOLT.map(scale),
            calendar: Bounds { min: scale(CALENDAR_MIN), max: scale(CALENDAR_MAX) },
            stroke: stroke_width(size),
        }
    }
}

#[inline]
pub fn stroke_width(size: u32) -> u32 {
    (size / 32).max(1)
}

/// Even-odd point-in-polygon test.
pub fn point_in_polygon(px: f64, py: f64, poly: &[Point]) -> bool {
    let mut inside = false;
    let mut j = poly.len().wrapping_sub(1);
    for i in 0..poly.len() {
        let (a, b) = (poly[i], poly[j]);
        if (a.y > py) != (b.y > py) {
            let x_cross = a.x + (py - a.y) * (b.x - a.x) / (b.y - a.y);
            if px < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_corners_at_128() {
        let g = Geometry::for_size(128);
        assert_eq!(g.calendar.min, Point { x: 25.6, y: 76.8 });
        assert_eq!(g.calendar.max, Point { x: 102.4, y: 115.2 });
        assert_eq!(g.stroke, 4);
    }

    #[test]
    fn stroke_never_below_one() {
        assert_eq!(stroke_width(16), 1);
        assert_eq!(stroke_width(31), 1);
        assert_eq!(stroke_width(48), 1);
        assert_eq!(stroke_width(64), 2);
    }

    #[test]
    fn all_points_inside_canvas() {
        for size in [16u32, 48, 128] {
            let g = Geometry::for_size(size);
            let s = size as f64;
            let pts = g.bolt.iter().chain([&g.calendar.min, &g.calendar.max]);
            for p in pts {
                assert!(p.x >= 0.0 && p.x <= s && p.y >= 0.0 && p.y <= s, "{p:?} at {size}");
            }
        }
    }

    #[test]
    fn bolt_vertices_round_to_pixels_at_48() {
        let snapped: Vec<(f64, f64)> =
            Geometry::for_size(48).bolt.iter().map(|p| p.rounded()).map(|p| (p.x, p.y)).collect();
        assert_eq!(
            snapped,
            vec![(19.0, 5.0), (24.0, 19.0), (17.0, 19.0), (22.0, 34.0), (29.0, 14.0), (24.0, 14.0)]
        );
    }

    #[test]
    fn bolt_containment() {
        let g = Geometry::for_size(128);
        // lower stroke of the bolt, between the C-D and D-E edges
        assert!(point_in_polygon(58.5, 64.5, &g.bolt));
        // upper stroke, between A-B and D-E
        assert!(point_in_polygon(67.5, 44.5, &g.bolt));
        assert!(!point_in_polygon(0.5, 0.5, &g.bolt));
        assert!(!point_in_polygon(100.5, 64.5, &g.bolt));
    }
}
