use crate::languages::Rgb;
use rand::Rng;

const GLYPHS: &[char] = &['*', '+', 'o', '.', '~', '\''];
const PALETTE: &[Rgb] = &[
    Rgb::new(252, 186, 41),
    Rgb::new(16, 169, 91),
    Rgb::new(50, 138, 241),
    Rgb::new(236, 93, 73),
    Rgb::new(122, 94, 167),
    Rgb::new(46, 211, 233),
];
const MAX_TICKS: u32 = 90;

#[derive(Clone, Copy, Debug)]
pub struct Particle
{
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    pub glyph: char,
    pub color: Rgb,
}

impl Particle
{
    pub fn cell(&self) -> (u16, u16)
    {
        (self.x.max(0.0) as u16, self.y.max(0.0) as u16)
    }
}

/// A single burst of falling particles. Pieces are never respawned, so the
/// burst ends once they have all left the screen.
pub struct Confetti
{
    particles: Vec<Particle>,
    width: u16,
    height: u16,
    ticks: u32,
}

impl Confetti
{
    pub fn burst(rng: &mut impl Rng, width: u16, height: u16, count: usize) -> Self
    {
        let width = width.max(1);
        let height = height.max(1);
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..width as f32),
                y: -rng.gen_range(0.0..height as f32 / 2.0 + 1.0),
                dx: rng.gen_range(-0.3..0.3),
                dy: rng.gen_range(0.3..0.9),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
            })
            .collect();
        Self {
            particles,
            width,
            height,
            ticks: 0,
        }
    }

    pub fn tick(&mut self)
    {
        self.ticks += 1;
        for particle in &mut self.particles {
            particle.x += particle.dx;
            particle.y += particle.dy;
        }
        self.retain_on_screen();
    }

    /// Shrinks or grows the drawing area; pieces outside it are dropped.
    pub fn resize(&mut self, width: u16, height: u16)
    {
        self.width = width.max(1);
        self.height = height.max(1);
        self.retain_on_screen();
    }

    fn retain_on_screen(&mut self)
    {
        let (width, height) = (self.width as f32, self.height as f32);
        self.particles
            .retain(|particle| particle.y < height && particle.x >= 0.0 && particle.x < width);
    }

    /// Particles currently inside the screen.
    pub fn visible(&self) -> impl Iterator<Item = &Particle>
    {
        self.particles.iter().filter(|particle| particle.y >= 0.0)
    }

    pub fn is_finished(&self) -> bool
    {
        self.particles.is_empty() || self.ticks >= MAX_TICKS
    }
}

/// Fires on the first frame a round is won and stays quiet until the flag drops.
#[derive(Default)]
pub struct CelebrationLatch
{
    fired: bool,
}

impl CelebrationLatch
{
    pub fn observe(&mut self, celebrate: bool) -> bool
    {
        if !celebrate {
            self.fired = false;
            return false;
        }
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}
