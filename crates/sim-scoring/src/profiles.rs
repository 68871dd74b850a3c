//! Per-component segment fitness tables.
//!
//! Rows are `(name, gaming, business, workstation, tier)`. Unknown names get
//! the per-slot default; the defaults differ on purpose and must stay as is.

use serde::Serialize;
use sim_core::Segment;

use crate::Slot;

/// Fitness of one component for each segment, plus its generation tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub gaming: u8,
    pub business: u8,
    pub workstation: u8,
    pub tier: u8,
}

impl Profile {
    /// Fitness for one segment.
    pub fn score(&self, segment: Segment) -> u8 {
        match segment {
            Segment::Gaming => self.gaming,
            Segment::Business => self.business,
            Segment::Workstation => self.workstation,
        }
    }

    /// Segment-neutral quality: rounded mean of the three segment scores.
    pub fn quality(&self) -> u8 {
        let sum = u32::from(self.gaming) + u32::from(self.business) + u32::from(self.workstation);
        ((f64::from(sum) / 3.0).round()) as u8
    }
}

const fn p(gaming: u8, business: u8, workstation: u8, tier: u8) -> Profile {
    Profile {
        gaming,
        business,
        workstation,
        tier,
    }
}

pub const DEFAULT_CPU: Profile = p(30, 30, 30, 1);
pub const DEFAULT_GPU: Profile = p(20, 25, 15, 1);
pub const DEFAULT_RAM: Profile = p(15, 10, 5, 1);
pub const DEFAULT_SOUND: Profile = p(10, 20, 10, 1);

static CPU: &[(&str, Profile)] = &[
    ("MOS 6502", p(25, 20, 10, 1)),
    ("Zilog Z80", p(28, 30, 15, 1)),
    ("Intel 8088", p(30, 40, 20, 2)),
    ("Motorola 68000", p(55, 45, 45, 3)),
    ("Intel 80286", p(50, 60, 40, 3)),
    ("Intel 80386", p(70, 80, 70, 5)),
    ("Motorola 68030", p(72, 75, 80, 5)),
    ("Intel 80486", p(88, 98, 92, 6)),
    ("Intel Pentium", p(96, 100, 98, 7)),
    ("Intel Pentium Pro", p(95, 100, 100, 8)),
];

static GPU: &[(&str, Profile)] = &[
    ("CGA Graphics", p(20, 30, 15, 1)),
    ("Hercules Graphics", p(10, 45, 30, 1)),
    ("EGA Graphics", p(40, 55, 35, 2)),
    ("Amiga OCS", p(65, 40, 45, 3)),
    ("VGA Graphics", p(75, 85, 60, 4)),
    ("SVGA Graphics", p(85, 92, 75, 5)),
    ("S3 911 Accelerator", p(90, 95, 85, 6)),
    ("3dfx Voodoo", p(100, 80, 85, 7)),
];

static RAM: &[(&str, Profile)] = &[
    ("64KB RAM", p(15, 15, 10, 1)),
    ("128KB RAM", p(25, 30, 20, 2)),
    ("256KB RAM", p(35, 45, 30, 3)),
    ("512KB RAM", p(50, 60, 45, 4)),
    ("1MB RAM", p(65, 80, 60, 5)),
    ("2MB RAM", p(80, 98, 80, 6)),
    ("4MB RAM", p(90, 100, 90, 7)),
    ("8MB RAM", p(96, 100, 96, 8)),
    ("16MB RAM", p(100, 100, 100, 9)),
];

static SOUND: &[(&str, Profile)] = &[
    ("PC Speaker", p(10, 30, 20, 1)),
    ("Yamaha YM2149", p(35, 45, 25, 2)),
    ("SID 6581", p(50, 40, 25, 2)),
    ("Roland MT-32", p(75, 55, 60, 4)),
    ("AdLib", p(60, 50, 35, 3)),
    ("Sound Blaster", p(80, 60, 50, 4)),
    ("Sound Blaster 16", p(90, 70, 65, 5)),
    ("Gravis Ultrasound", p(95, 65, 70, 5)),
];

pub(crate) fn table(slot: Slot) -> &'static [(&'static str, Profile)] {
    match slot {
        Slot::Cpu => CPU,
        Slot::Gpu => GPU,
        Slot::Ram => RAM,
        Slot::Sound => SOUND,
    }
}

pub(crate) fn default_for(slot: Slot) -> Profile {
    match slot {
        Slot::Cpu => DEFAULT_CPU,
        Slot::Gpu => DEFAULT_GPU,
        Slot::Ram => DEFAULT_RAM,
        Slot::Sound => DEFAULT_SOUND,
    }
}

/// Exact-name row lookup.
pub(crate) fn lookup(slot: Slot, name: &str) -> Option<Profile> {
    table(slot).iter().find(|(n, _)| *n == name).map(|(_, p)| *p)
}
