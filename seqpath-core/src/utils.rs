/// Complement of a single residue.
///
/// `A <-> T`, `C <-> G`, `U -> A`, `N -> N`, case preserved. Anything else is
/// returned unchanged.
#[inline]
pub fn complement(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'U' => b'A',
        b'N' => b'N',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        b'u' => b'a',
        b'n' => b'n',
        other => other,
    }
}

/// [`complement`] for a `char`; non-ASCII characters pass through unchanged.
#[inline]
pub fn complement_char(c: char) -> char {
    if c.is_ascii() {
        complement(c as u8) as char
    } else {
        c
    }
}

///
/// Reverse complement of a residue string.
///
/// # Arguments
/// - residues: forward strand residues
///
/// # Returns
/// - the complementary strand read 5' to 3'
///
pub fn reverse_complement(residues: &str) -> String {
    residues.chars().rev().map(complement_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("AAGG", "CCTT")]
    #[case("ACGT", "ACGT")]
    #[case("acgtN", "Nacgt")]
    #[case("AUGC", "GCAT")]
    #[case("AC-GT*", "*AC-GT")]
    #[case("Aé", "éT")]
    #[case("GαTβ", "βAαC")]
    fn test_reverse_complement(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(reverse_complement(input), expected);
    }

    #[rstest]
    fn test_reverse_complement_twice_restores_dna() {
        let seq = "ACGTTGCAnnacgt";
        assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
    }
}
