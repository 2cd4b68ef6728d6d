use std::collections::HashMap;
use std::sync::LazyLock;

/// Slack emoji shortcodes and the glyphs they stand for.
///
/// Shortcodes are stored without the surrounding colons. Several Slack
/// aliases (`+1`/`thumbsup`, `heart`/`red_heart`, ...) map to the same glyph.
pub const EMOJI: &[(&str, &str)] = &[
    // Hands
    ("wave", "\u{1F44B}"),
    ("+1", "\u{1F44D}"),
    ("thumbsup", "\u{1F44D}"),
    ("-1", "\u{1F44E}"),
    ("thumbsdown", "\u{1F44E}"),
    ("clap", "\u{1F44F}"),
    ("raised_hands", "\u{1F64C}"),
    ("pray", "\u{1F64F}"),
    ("muscle", "\u{1F4AA}"),
    ("ok_hand", "\u{1F44C}"),
    ("point_up", "\u{261D}\u{FE0F}"),
    ("point_down", "\u{1F447}"),
    ("point_left", "\u{1F448}"),
    ("point_right", "\u{1F449}"),
    ("v", "\u{270C}\u{FE0F}"),
    ("crossed_fingers", "\u{1F91E}"),
    ("handshake", "\u{1F91D}"),
    ("writing_hand", "\u{270D}\u{FE0F}"),
    ("eyes", "\u{1F440}"),
    ("brain", "\u{1F9E0}"),
    // Faces
    ("smile", "\u{1F604}"),
    ("smiley", "\u{1F603}"),
    ("grinning", "\u{1F600}"),
    ("grin", "\u{1F601}"),
    ("laughing", "\u{1F606}"),
    ("joy", "\u{1F602}"),
    ("rofl", "\u{1F923}"),
    ("sweat_smile", "\u{1F605}"),
    ("slightly_smiling_face", "\u{1F642}"),
    ("upside_down_face", "\u{1F643}"),
    ("wink", "\u{1F609}"),
    ("blush", "\u{1F60A}"),
    ("innocent", "\u{1F607}"),
    ("heart_eyes", "\u{1F60D}"),
    ("star-struck", "\u{1F929}"),
    ("kissing_heart", "\u{1F618}"),
    ("yum", "\u{1F60B}"),
    ("stuck_out_tongue", "\u{1F61B}"),
    ("sunglasses", "\u{1F60E}"),
    ("nerd_face", "\u{1F913}"),
    ("hugging_face", "\u{1F917}"),
    ("thinking_face", "\u{1F914}"),
    ("face_with_monocle", "\u{1F9D0}"),
    ("neutral_face", "\u{1F610}"),
    ("expressionless", "\u{1F611}"),
    ("no_mouth", "\u{1F636}"),
    ("smirk", "\u{1F60F}"),
    ("unamused", "\u{1F612}"),
    ("face_with_rolling_eyes", "\u{1F644}"),
    ("grimacing", "\u{1F62C}"),
    ("relieved", "\u{1F60C}"),
    ("pensive", "\u{1F614}"),
    ("sleepy", "\u{1F62A}"),
    ("sleeping", "\u{1F634}"),
    ("mask", "\u{1F637}"),
    ("exploding_head", "\u{1F92F}"),
    ("partying_face", "\u{1F973}"),
    ("confused", "\u{1F615}"),
    ("worried", "\u{1F61F}"),
    ("open_mouth", "\u{1F62E}"),
    ("astonished", "\u{1F632}"),
    ("flushed", "\u{1F633}"),
    ("pleading_face", "\u{1F97A}"),
    ("cry", "\u{1F622}"),
    ("sob", "\u{1F62D}"),
    ("scream", "\u{1F631}"),
    ("disappointed", "\u{1F61E}"),
    ("sweat", "\u{1F613}"),
    ("weary", "\u{1F629}"),
    ("rage", "\u{1F621}"),
    ("angry", "\u{1F620}"),
    ("skull", "\u{1F480}"),
    ("robot_face", "\u{1F916}"),
    ("ghost", "\u{1F47B}"),
    ("see_no_evil", "\u{1F648}"),
    // Hearts
    ("heart", "\u{2764}\u{FE0F}"),
    ("red_heart", "\u{2764}\u{FE0F}"),
    ("orange_heart", "\u{1F9E1}"),
    ("yellow_heart", "\u{1F49B}"),
    ("green_heart", "\u{1F49A}"),
    ("blue_heart", "\u{1F499}"),
    ("purple_heart", "\u{1F49C}"),
    ("black_heart", "\u{1F5A4}"),
    ("broken_heart", "\u{1F494}"),
    ("sparkling_heart", "\u{1F496}"),
    // Symbols
    ("100", "\u{1F4AF}"),
    ("fire", "\u{1F525}"),
    ("sparkles", "\u{2728}"),
    ("star", "\u{2B50}"),
    ("star2", "\u{1F31F}"),
    ("zap", "\u{26A1}"),
    ("boom", "\u{1F4A5}"),
    ("tada", "\u{1F389}"),
    ("confetti_ball", "\u{1F38A}"),
    ("white_check_mark", "\u{2705}"),
    ("heavy_check_mark", "\u{2714}\u{FE0F}"),
    ("ballot_box_with_check", "\u{2611}\u{FE0F}"),
    ("x", "\u{274C}"),
    ("heavy_multiplication_x", "\u{2716}\u{FE0F}"),
    ("warning", "\u{26A0}\u{FE0F}"),
    ("no_entry", "\u{26D4}"),
    ("question", "\u{2753}"),
    ("exclamation", "\u{2757}"),
    ("bangbang", "\u{203C}\u{FE0F}"),
    ("heavy_plus_sign", "\u{2795}"),
    ("heavy_minus_sign", "\u{2796}"),
    ("arrow_right", "\u{27A1}\u{FE0F}"),
    ("arrow_left", "\u{2B05}\u{FE0F}"),
    ("arrow_up", "\u{2B06}\u{FE0F}"),
    ("arrow_down", "\u{2B07}\u{FE0F}"),
    ("recycle", "\u{267B}\u{FE0F}"),
    ("red_circle", "\u{1F534}"),
    ("large_green_circle", "\u{1F7E2}"),
    ("large_blue_circle", "\u{1F535}"),
    ("white_circle", "\u{26AA}"),
    ("black_circle", "\u{26AB}"),
    ("speech_balloon", "\u{1F4AC}"),
    ("thought_balloon", "\u{1F4AD}"),
    ("information_source", "\u{2139}\u{FE0F}"),
    // Nature and weather
    ("sunny", "\u{2600}\u{FE0F}"),
    ("cloud", "\u{2601}\u{FE0F}"),
    ("umbrella", "\u{2614}"),
    ("snowflake", "\u{2744}\u{FE0F}"),
    ("rainbow", "\u{1F308}"),
    ("earth_americas", "\u{1F30E}"),
    ("earth_africa", "\u{1F30D}"),
    ("globe_with_meridians", "\u{1F310}"),
    ("seedling", "\u{1F331}"),
    ("evergreen_tree", "\u{1F332}"),
    ("sunflower", "\u{1F33B}"),
    ("dog", "\u{1F436}"),
    ("cat", "\u{1F431}"),
    ("unicorn_face", "\u{1F984}"),
    ("snake", "\u{1F40D}"),
    ("crab", "\u{1F980}"),
    // Food and drink
    ("coffee", "\u{2615}"),
    ("tea", "\u{1F375}"),
    ("beer", "\u{1F37A}"),
    ("beers", "\u{1F37B}"),
    ("pizza", "\u{1F355}"),
    ("cake", "\u{1F370}"),
    ("birthday", "\u{1F382}"),
    ("doughnut", "\u{1F369}"),
    ("cookie", "\u{1F36A}"),
    ("apple", "\u{1F34E}"),
    ("taco", "\u{1F32E}"),
    // Objects and activities
    ("rocket", "\u{1F680}"),
    ("bulb", "\u{1F4A1}"),
    ("computer", "\u{1F4BB}"),
    ("keyboard", "\u{2328}\u{FE0F}"),
    ("iphone", "\u{1F4F1}"),
    ("email", "\u{1F4E7}"),
    ("envelope", "\u{2709}\u{FE0F}"),
    ("memo", "\u{1F4DD}"),
    ("pencil2", "\u{270F}\u{FE0F}"),
    ("books", "\u{1F4DA}"),
    ("book", "\u{1F4D6}"),
    ("bookmark", "\u{1F516}"),
    ("link", "\u{1F517}"),
    ("paperclip", "\u{1F4CE}"),
    ("pushpin", "\u{1F4CC}"),
    ("round_pushpin", "\u{1F4CD}"),
    ("calendar", "\u{1F4C6}"),
    ("date", "\u{1F4C5}"),
    ("clock3", "\u{1F552}"),
    ("hourglass", "\u{231B}"),
    ("alarm_clock", "\u{23F0}"),
    ("mag", "\u{1F50D}"),
    ("lock", "\u{1F512}"),
    ("unlock", "\u{1F513}"),
    ("key", "\u{1F511}"),
    ("hammer_and_wrench", "\u{1F6E0}\u{FE0F}"),
    ("wrench", "\u{1F527}"),
    ("gear", "\u{2699}\u{FE0F}"),
    ("package", "\u{1F4E6}"),
    ("chart_with_upwards_trend", "\u{1F4C8}"),
    ("chart_with_downwards_trend", "\u{1F4C9}"),
    ("bar_chart", "\u{1F4CA}"),
    ("clipboard", "\u{1F4CB}"),
    ("loudspeaker", "\u{1F4E2}"),
    ("mega", "\u{1F4E3}"),
    ("bell", "\u{1F514}"),
    ("microphone", "\u{1F3A4}"),
    ("headphones", "\u{1F3A7}"),
    ("movie_camera", "\u{1F3A5}"),
    ("camera", "\u{1F4F7}"),
    ("art", "\u{1F3A8}"),
    ("trophy", "\u{1F3C6}"),
    ("medal", "\u{1F3C5}"),
    ("dart", "\u{1F3AF}"),
    ("gift", "\u{1F381}"),
    ("balloon", "\u{1F388}"),
    ("moneybag", "\u{1F4B0}"),
    ("dollar", "\u{1F4B5}"),
    ("house", "\u{1F3E0}"),
    ("office", "\u{1F3E2}"),
    ("school", "\u{1F3EB}"),
    ("mortar_board", "\u{1F393}"),
    ("microscope", "\u{1F52C}"),
    ("telescope", "\u{1F52D}"),
    ("test_tube", "\u{1F9EA}"),
    ("dna", "\u{1F9EC}"),
    ("airplane", "\u{2708}\u{FE0F}"),
    ("car", "\u{1F697}"),
    ("construction", "\u{1F6A7}"),
    ("rotating_light", "\u{1F6A8}"),
    ("checkered_flag", "\u{1F3C1}"),
    ("triangular_flag_on_post", "\u{1F6A9}"),
    ("wave_dash", "\u{3030}\u{FE0F}"),
];

static INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EMOJI.iter().copied().collect());

/// Look up the glyph for a shortcode given without colons.
pub fn lookup(code: &str) -> Option<&'static str> {
    INDEX.get(code).copied()
}
