use once_cell::sync::Lazy;
use std::collections::HashMap;

// Latin uppercase to Unicode small caps. Q and X have no standard
// small-caps codepoint and are left out.
static SMALL_CAPS: Lazy<HashMap<char, char>> = Lazy::new(|| {
    HashMap::from([
        ('A', 'ᴀ'),
        ('B', 'ʙ'),
        ('C', 'ᴄ'),
        ('D', 'ᴅ'),
        ('E', 'ᴇ'),
        ('F', 'ꜰ'),
        ('G', 'ɢ'),
        ('H', 'ʜ'),
        ('I', 'ɪ'),
        ('J', 'ᴊ'),
        ('K', 'ᴋ'),
        ('L', 'ʟ'),
        ('M', 'ᴍ'),
        ('N', 'ɴ'),
        ('O', 'ᴏ'),
        ('P', 'ᴘ'),
        ('R', 'ʀ'),
        ('S', 'ꜱ'),
        ('T', 'ᴛ'),
        ('U', 'ᴜ'),
        ('V', 'ᴠ'),
        ('W', 'ᴡ'),
        ('Y', 'ʏ'),
        ('Z', 'ᴢ'),
    ])
});

// Every mapping is one char to one char, so the length in chars is
// preserved. Unmapped characters pass through unchanged.
pub fn to_small_caps(text: &str) -> String {
    text.chars()
        .map(|c| SMALL_CAPS.get(&c).copied().unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_small_caps() {
        assert_eq!(to_small_caps("NOM"), "ɴᴏᴍ");
        assert_eq!(to_small_caps("ACC"), "ᴀᴄᴄ");

        // Q and X are not in the table
        assert_eq!(to_small_caps("Q"), "Q");
        assert_eq!(to_small_caps("SEQ"), "ꜱᴇQ");

        // Lowercase, digits and punctuation pass through
        assert_eq!(to_small_caps("go.1SG"), "go.1ꜱɢ");
        assert_eq!(to_small_caps(""), "");
    }

    #[test]
    fn test_to_small_caps_preserves_char_count() {
        for text in ["NOM", "1SG", "dog-ACC-PL", "ʔabc"] {
            assert_eq!(to_small_caps(text).chars().count(), text.chars().count());
        }
    }
}
