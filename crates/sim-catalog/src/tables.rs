//! Historical hardware timeline, one table per category in release order.

use sim_core::{GameTime, HardwareKind, HardwareRecord};

const fn rec(
    name: &'static str,
    kind: HardwareKind,
    performance: u8,
    cost: u32,
    year: i32,
    quarter: u8,
) -> HardwareRecord {
    HardwareRecord {
        name,
        kind,
        performance,
        cost,
        available_from: GameTime::new(year, quarter),
    }
}

use HardwareKind::{Cpu, Display, Gpu, Memory, Sound, Storage};

pub static CPUS: &[HardwareRecord] = &[
    rec("MOS 6502", Cpu, 8, 20, 1983, 1),
    rec("Zilog Z80", Cpu, 10, 25, 1983, 1),
    rec("Intel 8088", Cpu, 14, 40, 1983, 1),
    rec("Motorola 68000", Cpu, 24, 70, 1984, 1),
    rec("Intel 80286", Cpu, 28, 90, 1984, 3),
    rec("Intel 80386", Cpu, 45, 160, 1986, 4),
    rec("Motorola 68030", Cpu, 50, 180, 1987, 3),
    rec("Intel 80486", Cpu, 68, 260, 1989, 2),
    rec("Intel Pentium", Cpu, 82, 380, 1993, 1),
    rec("Intel Pentium Pro", Cpu, 90, 520, 1995, 4),
];

pub static GPUS: &[HardwareRecord] = &[
    rec("CGA Graphics", Gpu, 10, 20, 1983, 1),
    rec("Hercules Graphics", Gpu, 12, 25, 1983, 1),
    rec("EGA Graphics", Gpu, 25, 45, 1984, 4),
    rec("Amiga OCS", Gpu, 40, 60, 1985, 3),
    rec("VGA Graphics", Gpu, 55, 90, 1987, 2),
    rec("SVGA Graphics", Gpu, 65, 130, 1989, 1),
    rec("S3 911 Accelerator", Gpu, 78, 170, 1991, 3),
    rec("3dfx Voodoo", Gpu, 95, 300, 1996, 4),
];

pub static MEMORY: &[HardwareRecord] = &[
    rec("64KB RAM", Memory, 8, 15, 1983, 1),
    rec("128KB RAM", Memory, 14, 25, 1983, 3),
    rec("256KB RAM", Memory, 22, 40, 1984, 2),
    rec("512KB RAM", Memory, 32, 60, 1985, 1),
    rec("1MB RAM", Memory, 45, 90, 1986, 2),
    rec("2MB RAM", Memory, 58, 130, 1988, 1),
    rec("4MB RAM", Memory, 70, 180, 1990, 1),
    rec("8MB RAM", Memory, 82, 240, 1992, 2),
    rec("16MB RAM", Memory, 92, 320, 1994, 3),
];

pub static SOUND: &[HardwareRecord] = &[
    rec("PC Speaker", Sound, 5, 2, 1983, 1),
    rec("Yamaha YM2149", Sound, 15, 10, 1983, 1),
    rec("SID 6581", Sound, 20, 12, 1983, 1),
    rec("Roland MT-32", Sound, 50, 120, 1987, 1),
    rec("AdLib", Sound, 35, 40, 1987, 3),
    rec("Sound Blaster", Sound, 55, 60, 1989, 4),
    rec("Sound Blaster 16", Sound, 70, 90, 1992, 2),
    rec("Gravis Ultrasound", Sound, 75, 110, 1992, 4),
];

pub static STORAGE: &[HardwareRecord] = &[
    rec("Cassette Drive", Storage, 5, 10, 1983, 1),
    rec("5.25\" Floppy Drive", Storage, 15, 60, 1983, 1),
    rec("3.5\" Floppy Drive", Storage, 25, 70, 1985, 2),
    rec("10MB Hard Drive", Storage, 40, 200, 1986, 1),
    rec("40MB Hard Drive", Storage, 60, 280, 1989, 3),
    rec("CD-ROM Drive", Storage, 70, 250, 1991, 2),
    rec("540MB Hard Drive", Storage, 85, 300, 1994, 1),
];

pub static DISPLAYS: &[HardwareRecord] = &[
    rec("Monochrome Monitor", Display, 10, 80, 1983, 1),
    rec("CGA Color Monitor", Display, 20, 150, 1983, 2),
    rec("EGA Monitor", Display, 35, 220, 1985, 1),
    rec("VGA Monitor", Display, 55, 300, 1987, 3),
    rec("SVGA Monitor", Display, 70, 380, 1990, 2),
    rec("17\" SVGA Monitor", Display, 85, 520, 1994, 4),
];

/// A computer case. Not time-gated.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CaseRecord {
    pub name: &'static str,
    /// Build quality contribution, 0-100.
    pub quality: u8,
    pub cost: u32,
}

pub static CASES: &[CaseRecord] = &[
    CaseRecord { name: "Plastic Case", quality: 50, cost: 40 },
    CaseRecord { name: "Standard Case", quality: 70, cost: 80 },
    CaseRecord { name: "Metal Desktop", quality: 85, cost: 140 },
    CaseRecord { name: "Premium Tower", quality: 95, cost: 220 },
];
