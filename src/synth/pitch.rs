//! The supported pitch set
//!
//! Pitch names follow the song text format: note letter, octave, optional
//! trailing `S` for sharp (`A4`, `A4S`, `C5`). The set covers the chromatic
//! range C4..C6 plus `REST`.
//!
//! Every pitch's name and semitone offset from the A4 reference live in the
//! single `PITCHES` table below. Name lookup, frequency math, and waveform
//! table indexing all go through it; there is no offset arithmetic anywhere
//! else.

/// A named pitch, or a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pitch {
    Rest,
    C4,
    C4S,
    D4,
    D4S,
    E4,
    F4,
    F4S,
    G4,
    G4S,
    A4,
    A4S,
    B4,
    C5,
    C5S,
    D5,
    D5S,
    E5,
    F5,
    F5S,
    G5,
    G5S,
    A5,
    A5S,
    B5,
    C6,
}

/// One row of the pitch configuration table.
struct PitchDef {
    pitch: Pitch,
    name: &'static str,
    /// Semitone offset from A4; None for a rest
    semitones: Option<i32>,
}

const fn def(pitch: Pitch, name: &'static str, semitones: i32) -> PitchDef {
    PitchDef {
        pitch,
        name,
        semitones: Some(semitones),
    }
}

/// The pitch configuration table. Declaration order matches the `Pitch`
/// variant order, so a variant's discriminant doubles as its table index.
const PITCHES: &[PitchDef] = &[
    PitchDef {
        pitch: Pitch::Rest,
        name: "REST",
        semitones: None,
    },
    def(Pitch::C4, "C4", -9),
    def(Pitch::C4S, "C4S", -8),
    def(Pitch::D4, "D4", -7),
    def(Pitch::D4S, "D4S", -6),
    def(Pitch::E4, "E4", -5),
    def(Pitch::F4, "F4", -4),
    def(Pitch::F4S, "F4S", -3),
    def(Pitch::G4, "G4", -2),
    def(Pitch::G4S, "G4S", -1),
    def(Pitch::A4, "A4", 0),
    def(Pitch::A4S, "A4S", 1),
    def(Pitch::B4, "B4", 2),
    def(Pitch::C5, "C5", 3),
    def(Pitch::C5S, "C5S", 4),
    def(Pitch::D5, "D5", 5),
    def(Pitch::D5S, "D5S", 6),
    def(Pitch::E5, "E5", 7),
    def(Pitch::F5, "F5", 8),
    def(Pitch::F5S, "F5S", 9),
    def(Pitch::G5, "G5", 10),
    def(Pitch::G5S, "G5S", 11),
    def(Pitch::A5, "A5", 12),
    def(Pitch::A5S, "A5S", 13),
    def(Pitch::B5, "B5", 14),
    def(Pitch::C6, "C6", 15),
];

impl Pitch {
    /// Look up a pitch by its song-text name.
    ///
    /// Returns None for unknown names; an unknown name is a per-line
    /// classification result, not an error.
    pub fn from_name(name: &str) -> Option<Pitch> {
        PITCHES.iter().find(|d| d.name == name).map(|d| d.pitch)
    }

    /// The canonical song-text name.
    pub fn name(&self) -> &'static str {
        PITCHES[self.index()].name
    }

    /// Semitone offset from the A4 reference; None for a rest.
    pub fn semitones(&self) -> Option<i32> {
        PITCHES[self.index()].semitones
    }

    /// Frequency in Hz for a given reference tuning; None for a rest.
    ///
    /// Equal temperament: `reference_hz * 2^(semitones / 12)`.
    pub fn frequency(&self, reference_hz: f64) -> Option<f64> {
        self.semitones()
            .map(|n| reference_hz * 2f64.powf(n as f64 / 12.0))
    }

    /// Index into the pitch table; stable over the process lifetime.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Iterate over every supported pitch in table order.
    pub fn all() -> impl Iterator<Item = Pitch> {
        PITCHES.iter().map(|d| d.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_variants() {
        // index() relies on declaration order matching the table
        for (i, pitch) in Pitch::all().enumerate() {
            assert_eq!(pitch.index(), i, "table order broken at {}", pitch.name());
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Pitch::from_name("A4"), Some(Pitch::A4));
        assert_eq!(Pitch::from_name("C4S"), Some(Pitch::C4S));
        assert_eq!(Pitch::from_name("REST"), Some(Pitch::Rest));
        assert_eq!(Pitch::from_name("H2"), None);
        assert_eq!(Pitch::from_name("a4"), None); // names are case-sensitive
    }

    #[test]
    fn test_name_round_trip() {
        for pitch in Pitch::all() {
            assert_eq!(Pitch::from_name(pitch.name()), Some(pitch));
        }
    }

    #[test]
    fn test_reference_frequency() {
        // A4 is the reference itself
        let a4 = Pitch::A4.frequency(440.0).unwrap();
        assert!((a4 - 440.0).abs() < 1e-9);

        // A5 is one octave up
        let a5 = Pitch::A5.frequency(440.0).unwrap();
        assert!((a5 - 880.0).abs() < 1e-9);

        // C4 is nine semitones below A4: ~261.63 Hz (middle C)
        let c4 = Pitch::C4.frequency(440.0).unwrap();
        assert!((c4 - 261.6256).abs() < 0.01);

        // Rests have no frequency
        assert_eq!(Pitch::Rest.frequency(440.0), None);
    }

    #[test]
    fn test_semitones_ascend_chromatically() {
        let offsets: Vec<i32> = Pitch::all().filter_map(|p| p.semitones()).collect();
        for pair in offsets.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
        assert_eq!(offsets.first(), Some(&-9)); // C4
        assert_eq!(offsets.last(), Some(&15)); // C6
    }
}
