//! Deterministic star field for the hero background.
//!
//! Stars come from a seeded Mulberry32 stream; edges link every pair closer
//! than [`EDGE_THRESHOLD`] percent of the viewport.

pub const DEFAULT_SEED: u32 = 7;
pub const DEFAULT_STAR_COUNT: usize = 36;
pub const EDGE_THRESHOLD: f64 = 20.0;
const EDGE_MAX_OPACITY: f64 = 0.08;

/// Mulberry32: 32-bit state, one wrapping add per draw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// Positions are percentages of the viewport; drift offsets likewise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub id: usize,
    pub cx: f64,
    pub cy: f64,
    /// Pixels.
    pub radius: f64,
    pub opacity: f64,
    pub accent: bool,
    pub dx: f64,
    pub dy: f64,
    pub dx2: f64,
    pub dy2: f64,
    pub duration_s: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Constellation {
    pub stars: Vec<Star>,
    pub edges: Vec<Edge>,
}

impl Default for Constellation {
    fn default() -> Self {
        generate(DEFAULT_SEED, DEFAULT_STAR_COUNT)
    }
}

pub fn generate(seed: u32, count: usize) -> Constellation {
    let mut rng = Mulberry32::new(seed);
    let stars: Vec<Star> = (0..count).map(|id| next_star(&mut rng, id)).collect();
    let edges = edges_within(&stars, EDGE_THRESHOLD);

    Constellation { stars, edges }
}

// Draw order is part of the output contract.
fn next_star(rng: &mut Mulberry32, id: usize) -> Star {
    let cx = 5.0 + rng.next_f64() * 90.0;
    let cy = 5.0 + rng.next_f64() * 90.0;
    let radius = 1.5 + rng.next_f64() * 2.5;
    let opacity = 0.15 + rng.next_f64() * 0.45;
    let accent = rng.next_f64() < 0.3;
    let dx = (rng.next_f64() - 0.5) * 10.0;
    let dy = (rng.next_f64() - 0.5) * 10.0;
    let dx2 = (rng.next_f64() - 0.5) * 8.0;
    let dy2 = (rng.next_f64() - 0.5) * 8.0;
    let duration_s = 6.0 + rng.next_f64() * 10.0;

    Star {
        id,
        cx,
        cy,
        radius,
        opacity,
        accent,
        dx,
        dy,
        dx2,
        dy2,
        duration_s,
    }
}

/// Every pair `i < j` closer than `threshold`, fading linearly with distance.
pub fn edges_within(stars: &[Star], threshold: f64) -> Vec<Edge> {
    let mut edges = Vec::new();
    if threshold <= 0.0 {
        return edges;
    }

    for (i, a) in stars.iter().enumerate() {
        for b in &stars[i + 1..] {
            let ddx = a.cx - b.cx;
            let ddy = a.cy - b.cy;
            let distance = (ddx * ddx + ddy * ddy).sqrt();
            if distance < threshold {
                edges.push(Edge {
                    from: a.id,
                    to: b.id,
                    x1: a.cx,
                    y1: a.cy,
                    x2: b.cx,
                    y2: b.cy,
                    opacity: EDGE_MAX_OPACITY * (1.0 - distance / threshold),
                });
            }
        }
    }

    edges
}
