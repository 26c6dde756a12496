//! Panel visibility bit-flags.
//!
//! `all()` is generated from the declared flags, so adding a flag extends it.

use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Side panels shown next to the panadapter.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct SidePanelOptions: u8 {
        const RX  = 1 << 0;
        const TX  = 1 << 1;
        const PH1 = 1 << 2;
        const PH2 = 1 << 3;
        const CW  = 1 << 4;
        const EQ  = 1 << 5;
    }
}

bitflags! {
    /// DAX panels shown in the DAX window.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct DaxPanelOptions: u8 {
        const TX  = 1 << 0;
        const MIC = 1 << 1;
        const RX  = 1 << 2;
        const IQ  = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_union_of_declared_flags() {
        let side = SidePanelOptions::all();
        let union = SidePanelOptions::all().iter_names()
            .fold(SidePanelOptions::empty(), |acc, (_, flag)| acc | flag);
        assert_eq!(side, union);
        assert_eq!(side.bits(), 0b0011_1111);

        assert_eq!(DaxPanelOptions::all().bits(), 0b0000_1111);
    }

    #[test]
    fn unknown_bits_are_dropped() {
        let side = SidePanelOptions::from_bits_truncate(0b1100_0001);
        assert_eq!(side, SidePanelOptions::RX);
    }
}
