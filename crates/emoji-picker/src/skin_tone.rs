//! Skin tone substitution.

use emoji_core::{Emoji, PickerError, SkinTone, SystemEmoji, UnifiedIndex};

/// Tone an emoji is currently rendered in.
///
/// Base emojis that support tones are "default"; toned variants report
/// their first applied tone. Emojis without tone support have none.
pub fn skin_of(emoji: &Emoji) -> Option<SkinTone> {
    match emoji {
        Emoji::System(SystemEmoji {
            skin_variations: Some(_),
            ..
        }) => Some(SkinTone::default_tone()),
        Emoji::System(SystemEmoji {
            skins: Some(skins), ..
        }) => skins.first().cloned(),
        _ => None,
    }
}

/// Re-render `emoji` from `current` tone into `target` tone.
///
/// The new unified code is computed from the variation table (when leaving
/// default), by stripping the tone suffix (when going back to default), or
/// by swapping tone codes, and then resolved through `index`.
pub fn apply_user_skin_tone(
    emoji: &Emoji,
    current: &SkinTone,
    target: &SkinTone,
    index: &UnifiedIndex,
) -> Result<Emoji, PickerError> {
    if current == target {
        return Ok(emoji.clone());
    }

    let Emoji::System(system) = emoji else {
        return Ok(emoji.clone());
    };

    let unified = system.unified.to_lowercase();
    let current_code = current.as_str().to_lowercase();
    let target_code = target.as_str().to_lowercase();

    let code = if current.is_default() {
        let Some(variations) = &system.skin_variations else {
            return Ok(emoji.clone());
        };
        variations
            .get(target)
            .map(|variation| variation.unified.to_lowercase())
            .ok_or_else(|| PickerError::MissingSkinVariation {
                emoji: emoji.id(),
                tone: target.clone(),
            })?
    } else if target.is_default() {
        unified.replace(&format!("-{current_code}"), "")
    } else {
        unified.replace(&current_code, &target_code)
    };

    index
        .get(&code)
        .cloned()
        .ok_or(PickerError::UnknownUnified(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIGHT: &str = "1F3FB";
    const DARK: &str = "1F3FF";

    fn thumbs_up() -> Emoji {
        Emoji::system("1F44D", &["+1", "thumbsup"]).with_skin_variations([
            (LIGHT, "1F44D-1F3FB"),
            (DARK, "1F44D-1F3FF"),
        ])
    }

    fn index() -> UnifiedIndex {
        let emojis = [
            thumbs_up(),
            Emoji::system("1F44D-1F3FB", &["+1_light"]).with_skins([LIGHT]),
            Emoji::system("1F44D-1F3FF", &["+1_dark"]).with_skins([DARK]),
            Emoji::system("1F600", &["grinning"]),
        ];
        UnifiedIndex::from_emojis(emojis.iter())
    }

    #[test]
    fn test_skin_of() {
        assert_eq!(skin_of(&thumbs_up()), Some(SkinTone::default_tone()));
        let light = Emoji::system("1F44D-1F3FB", &["+1_light"]).with_skins([LIGHT]);
        assert_eq!(skin_of(&light), Some(SkinTone::from(LIGHT)));
        assert_eq!(skin_of(&Emoji::system("1F600", &["grinning"])), None);
        assert_eq!(skin_of(&Emoji::custom("c1", "parrot")), None);
    }

    #[test]
    fn test_same_tone_is_identity() {
        let emoji = thumbs_up();
        let default = SkinTone::default_tone();
        // Empty index: identity must not look anything up
        let result =
            apply_user_skin_tone(&emoji, &default, &default, &UnifiedIndex::default()).unwrap();
        assert_eq!(result, emoji);
    }

    #[test]
    fn test_default_to_tone_uses_variation_table() {
        let result = apply_user_skin_tone(
            &thumbs_up(),
            &SkinTone::default_tone(),
            &LIGHT.into(),
            &index(),
        )
        .unwrap();
        assert_eq!(result.name(), "+1_light");
    }

    #[test]
    fn test_tone_to_tone_swaps_code() {
        let light = Emoji::system("1F44D-1F3FB", &["+1_light"]).with_skins([LIGHT]);
        let result = apply_user_skin_tone(&light, &LIGHT.into(), &DARK.into(), &index()).unwrap();
        assert_eq!(result.name(), "+1_dark");
    }

    #[test]
    fn test_round_trip_recovers_base() {
        let index = index();
        let base = thumbs_up();
        let default = SkinTone::default_tone();

        for tone in [LIGHT, DARK] {
            let tone = SkinTone::from(tone);
            let toned = apply_user_skin_tone(&base, &default, &tone, &index).unwrap();
            assert_ne!(toned, base);
            let back = apply_user_skin_tone(&toned, &tone, &default, &index).unwrap();
            assert_eq!(back, base);
        }
    }

    #[test]
    fn test_no_variation_table_is_noop() {
        let grinning = Emoji::system("1F600", &["grinning"]);
        let result = apply_user_skin_tone(
            &grinning,
            &SkinTone::default_tone(),
            &LIGHT.into(),
            &index(),
        )
        .unwrap();
        assert_eq!(result, grinning);
    }

    #[test]
    fn test_missing_variation_fails() {
        let err = apply_user_skin_tone(
            &thumbs_up(),
            &SkinTone::default_tone(),
            &"1F3FD".into(),
            &index(),
        )
        .unwrap_err();
        assert!(matches!(err, PickerError::MissingSkinVariation { .. }));
    }

    #[test]
    fn test_unknown_code_fails() {
        let light = Emoji::system("1F44D-1F3FB", &["+1_light"]).with_skins([LIGHT]);
        let err = apply_user_skin_tone(&light, &LIGHT.into(), &"1F3FD".into(), &index())
            .unwrap_err();
        assert_eq!(err, PickerError::UnknownUnified("1f44d-1f3fd".to_string()));
    }
}
