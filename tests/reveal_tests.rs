use recipe_picker::reveal::Typewriter;

#[test]
fn reveals_one_character_per_tick() {
    let mut tw = Typewriter::new("麻婆豆腐");
    assert_eq!(tw.tick(), Some('麻'));
    assert_eq!(tw.visible(), "麻");
    assert_eq!(tw.tick(), Some('婆'));
    assert_eq!(tw.tick(), Some('豆'));
    assert_eq!(tw.tick(), Some('腐'));
    assert!(tw.is_done());
    assert_eq!(tw.tick(), None);
    assert_eq!(tw.visible(), "麻婆豆腐");
}

#[test]
fn restart_discards_the_in_flight_reveal() {
    let mut tw = Typewriter::new("第一段内容");
    tw.tick();
    tw.tick();
    tw.restart("新内容");
    assert_eq!(tw.visible(), "");
    assert_eq!(tw.tick(), Some('新'));
}

#[test]
fn empty_text_is_done_immediately() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_done());
    assert_eq!(tw.tick(), None);
}
