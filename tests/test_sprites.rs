use pixel_invaders::sprites::{Animation, SpriteStore, GLYPH_COUNT};

// ── Asset table ───────────────────────────────────────────────────────────────

#[test]
fn store_sprite_dimensions() {
    let sprites = SpriteStore::new();

    assert_eq!(sprites.get(sprites.player).width, 11);
    assert_eq!(sprites.get(sprites.player).height, 7);
    assert_eq!(sprites.get(sprites.player_bullet).width, 1);
    assert_eq!(sprites.get(sprites.player_bullet).height, 3);
    assert_eq!(sprites.get(sprites.alien_death).width, 13);
    assert_eq!(sprites.get(sprites.alien_death).height, 7);

    // Squid 8 wide, crab 11, octopus 12 — both frames each
    for frame in 0..2 {
        assert_eq!(sprites.get(sprites.alien_frames[0][frame]).width, 8);
        assert_eq!(sprites.get(sprites.alien_frames[1][frame]).width, 11);
        assert_eq!(sprites.get(sprites.alien_frames[2][frame]).width, 12);
        assert_eq!(sprites.get(sprites.alien_frames[0][frame]).height, 8);
    }
    for frame in 0..2 {
        assert_eq!(sprites.get(sprites.alien_bullet[frame]).width, 3);
        assert_eq!(sprites.get(sprites.alien_bullet[frame]).height, 7);
    }
}

#[test]
fn sprite_data_matches_dimensions() {
    let sprites = SpriteStore::new();
    for &id in [sprites.player, sprites.player_bullet, sprites.alien_death].iter() {
        let s = sprites.get(id);
        assert_eq!(s.data.len(), (s.width * s.height) as usize);
    }
}

// ── Font lookup ───────────────────────────────────────────────────────────────

#[test]
fn glyph_lookup_covers_sheet() {
    let sprites = SpriteStore::new();
    // Sheet spans ' ' (32) through '`' (32 + 64)
    assert!(sprites.glyph(' ').is_some());
    assert!(sprites.glyph('A').is_some());
    assert!(sprites.glyph('`').is_some());
    assert_eq!(sprites.glyph('a'), None);
    assert_eq!(sprites.glyph('\u{1f}'), None);

    let g = sprites.glyph('S').expect("glyph");
    assert_eq!(sprites.get(g).width, 5);
    assert_eq!(sprites.get(g).height, 7);
}

#[test]
fn digit_lookup_matches_glyphs() {
    let sprites = SpriteStore::new();
    for d in 0..10 {
        let c = char::from(b'0' + d as u8);
        assert_eq!(sprites.digit(d), sprites.glyph(c).expect("digit glyph"));
    }
}

#[test]
fn glyph_count_is_sixty_five() {
    // ' '..='`' inclusive
    assert_eq!(GLYPH_COUNT, 65);
}

// ── Animation clocks ──────────────────────────────────────────────────────────

#[test]
fn animation_advances_and_wraps() {
    let sprites = SpriteStore::new();
    let mut anim = Animation::new(sprites.alien_frames[0], 2);

    assert_eq!(anim.current_frame(), sprites.alien_frames[0][0]);
    anim.advance();
    assert_eq!(anim.current_frame(), sprites.alien_frames[0][0]);
    anim.advance();
    assert_eq!(anim.current_frame(), sprites.alien_frames[0][1]);
    anim.advance();
    assert_eq!(anim.current_frame(), sprites.alien_frames[0][1]);
    // time would reach num_frames * frame_duration — wraps to the start
    anim.advance();
    assert_eq!(anim.time, 0);
    assert_eq!(anim.current_frame(), sprites.alien_frames[0][0]);
}

#[test]
fn non_looping_animation_holds_last_frame() {
    let sprites = SpriteStore::new();
    let mut anim = Animation::new(sprites.alien_bullet, 1);
    anim.looping = false;
    for _ in 0..10 {
        anim.advance();
    }
    assert_eq!(anim.current_frame(), sprites.alien_bullet[1]);
}
