use super::{CategorySpec, GlyphSource};

pub(super) const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "sex",
        glyphs: GlyphSource::Chars("♀♂⚢⚣⚤⚥⚧☿👭👬👫"),
        copy_all: true,
    },
    CategorySpec {
        name: "cats",
        glyphs: GlyphSource::Chars("😸😹😺😻😼😽😾😿🙀"),
        copy_all: true,
    },
    CategorySpec {
        name: "funny",
        glyphs: GlyphSource::Chars("😀😁😂😃😅😆😇😈😉😊😋😌😍😎😏😗😘😙😚😛😜😝☺☻👿👀"),
        copy_all: true,
    },
    CategorySpec {
        name: "sad",
        glyphs: GlyphSource::Chars("😐😒😓😔😕😖😤😞😟😠😡😢😣😥😦😧😨😩😪😫😭😮😯😰😱😲😳😴😵☹😷"),
        copy_all: true,
    },
    CategorySpec {
        name: "music",
        glyphs: GlyphSource::Chars("♫♪♭♩🎶🎨🎬🎤🎧🎼🎵🎹🎻🎺🎷🎸"),
        copy_all: true,
    },
    CategorySpec {
        name: "arrows",
        glyphs: GlyphSource::Chars("⇉⇇⇈⇊➺⇦⇨⇧⇩↔↕↖↗↘↙↯↰↱↲↳↴↵↶↷↺↻➭🔄⏪⏩⏫⏬"),
        copy_all: true,
    },
    CategorySpec {
        name: "numbers",
        glyphs: GlyphSource::Chars("①②③④⑤⑥⑦⑧⑨⑩➊➋➌➍➎➏➐➑➒➓½¾⒈⒉⒊⒋⒌⒍⒎⒏⒐⒑∞"),
        copy_all: true,
    },
    CategorySpec {
        name: "letters",
        glyphs: GlyphSource::Chars("ⓐⓑⓒⓓⓔⓕⓖⓗⓘⓙⓚⓛⓜⓝⓞⓟⓠⓡⓢⓣⓤⓥⓦⓨⓩ"),
        copy_all: true,
    },
    CategorySpec {
        name: "simbols",
        glyphs: GlyphSource::Chars("‼⁉…❓✔✗☑☒➖➗❌™®©Ω℮₤₧❎✅➿♿☠☯☮☘💲💯🚭🚮💤㋡🔞🚼🛀🚬🚭"),
        copy_all: true,
    },
    CategorySpec {
        name: "stars",
        glyphs: GlyphSource::Chars("✵✪✬✫✻✴☆✨✶✩★✾❄❀✿🃏⚝⚹⚜🌟🌠💫💥"),
        copy_all: true,
    },
    CategorySpec {
        name: "hearts",
        glyphs: GlyphSource::Chars("♥♡❤❦☙❣💌💘💞💖💓💗💟💝💑🌹💋💔💕"),
        copy_all: true,
    },
    CategorySpec {
        name: "hands",
        glyphs: GlyphSource::Chars("✌☜☞☝☟✋✊✍👊👌👏🙌👍👎"),
        copy_all: true,
    },
    CategorySpec {
        name: "weather",
        glyphs: GlyphSource::Chars("⛅⛈☀☁⚡☔☂❄☃☽☾🌞🌊🌋🌌🌁"),
        copy_all: true,
    },
    CategorySpec {
        name: "clothes",
        glyphs: GlyphSource::Chars("🎩👑👒👟👞👡👠👢👕👔👚👗🎽👖👘👙💼👜👝👛👓🎀🌂💄"),
        copy_all: true,
    },
    CategorySpec {
        name: "plants",
        glyphs: GlyphSource::Chars("💐🌸🌷🍀🌹🌻🌺🍁🍃🍂🌿🌾🍄🌵🌴🌲🌳🌰🌱🌼"),
        copy_all: true,
    },
    CategorySpec {
        name: "tech",
        glyphs: GlyphSource::Chars("🎥📷📹📼💿📀💽💾💻📱☎📞📟📠📡📺📻🔊🔉🔇🔔🔕📢⏰🔓🔒🔑💡🔌🔍🔧🔨📲⚛"),
        copy_all: true,
    },
    CategorySpec {
        name: "geometry",
        glyphs: GlyphSource::Chars("■●▲▼▓▒░◑◐〇◈▣▨▧▩◎◊□◕☉"),
        copy_all: true,
    },
    CategorySpec {
        name: "zodiac",
        glyphs: GlyphSource::Chars("♈♉♊♋♌♍♎♏♐♑♒♓"),
        copy_all: true,
    },
    CategorySpec {
        name: "chess",
        glyphs: GlyphSource::Chars("♔♕♖♗♘♙♚♛♜♝♞♟"),
        copy_all: true,
    },
    CategorySpec {
        name: "recycle",
        glyphs: GlyphSource::Chars("♲♻♳♴♵♶♷♸♹♺♼♽♾"),
        copy_all: true,
    },
    CategorySpec {
        name: "religion",
        glyphs: GlyphSource::Chars("☦☧☨☩☪☫☬☭☯࿊࿕☥✟✠✡⛤"),
        copy_all: true,
    },
    CategorySpec {
        name: "animals faces",
        glyphs: GlyphSource::Chars("🐭🐮🐵🐯🐰🐲🐳🐴🐶🐷🐸🐹🐺🐻🐼"),
        copy_all: true,
    },
    CategorySpec {
        name: "animals",
        glyphs: GlyphSource::Chars("🐞🐝🐜🐛🐀🐁🐂🐃🐄🐅🐆🐇🐈🐉🐊🐋🐌🐍🐎🐏🐐🐑"),
        copy_all: true,
    },
    CategorySpec {
        name: "animals 2",
        glyphs: GlyphSource::Chars("🐒🐓🐔🐕🐖🐗🐘🐪🐫🐩🐧🐨🐙🐬🐚🐟🐠🐡🐢🐣🐤🐥🐦"),
        copy_all: true,
    },
    CategorySpec {
        name: "faces",
        glyphs: GlyphSource::Chars("👲👳👮👷💂👶👦👧👨👩👴👵👱👼👸👹👺🙈🙉🙊💀👽👯💇"),
        copy_all: true,
    },
    CategorySpec {
        name: "sports",
        glyphs: GlyphSource::Chars("👾🎮🎴🀄🎲🎯🏈🏀⚽⚾🎾🎱🏉🎳⛳🚵🚴🏁🏇🏆🎿🏂🏊🏄⚾🎣"),
        copy_all: true,
    },
    CategorySpec {
        name: "fruits",
        glyphs: GlyphSource::Chars("🍎🍏🍊🍋🍒🍇🍉🍓🍑🍈🍌🍐🍍🍠🍆🍅🌽"),
        copy_all: true,
    },
    CategorySpec {
        name: "food",
        glyphs: GlyphSource::Chars("☕🍵🍶🍼🍺🍻🍸🍹🍷🍴🍕🍔🍟🍗🍖🍝🍛🍤🍱🍣🍥🍙🍜🍲🍢🍡🍳🍞🍩🍮🍦🍨🍧🎂🍰🍪🍫🍬🍭🍯"),
        copy_all: true,
    },
    CategorySpec {
        name: "buildings",
        glyphs: GlyphSource::Chars("🏠🏡🏫🏢🏣🏥🏪🏩🏨💒⛪🏬🏤🌇🌆🏯🏰⛺🏭🗼🗻🌄🌅🌃🗽🌉🎠🎡⛲🎢🚢🗽"),
        copy_all: true,
    },
    CategorySpec {
        name: "objects",
        glyphs: GlyphSource::Chars("🎍🎎🎒🎓🎏🎃👻🎅🎄🎁🎋🎉🎊🎈🎌🌎💩⚙⚖⚔⚒🔐🔗🔩"),
        copy_all: true,
    },
    CategorySpec {
        name: "transport",
        glyphs: GlyphSource::Chars("⛵🚤🚣⚓🚀✈💺🚁🚂🚊🚆🚈🚇🚋🚎🚌🚍🚙🚕🚖🚛🚚🚓🚔🚒🚑🚐🚲🚡🚟🚜"),
        copy_all: true,
    },
    CategorySpec {
        name: "papers",
        glyphs: GlyphSource::Chars("📧✉📩📨📫📪📬📭📮📝📃📑📊📋📆📁📂✂📌📎📏📐📗📓📔📒📚📖🔖📛🔬🔭📰"),
        copy_all: true,
    },
    CategorySpec {
        name: "multi-character",
        glyphs: GlyphSource::Strings(&[
            "d-( ʘ‿ʘ )_m",
            "ಠ_ಠ",
            "ಢ_ಢ",
            "┌П┐(⌣د̲⌣)┌П┐",
            "(￣(工)￣)",
            "⊙_ʘ",
            "ಡ_ಡ",
            "⊙﹏⊙",
            "⊙▃⊙",
            "¯\\_(ツ)_/¯",
            "(づ｡◕‿‿◕｡)づ",
            "⊂(ʘ‿ʘ)つ",
            "ლ(ಠ_ಠ ლ)",
            "≖_≖",
            "⊂(`･ω･´)つ",
            "Ծ_Ծ",
            "¯＼(⊙_ʘ)/¯",
            "ʕ•ᴥ•ʔ",
            "͡° ͜ʖ\u{feff} ͡°",
            "ᕦ(ò_óˇ)ᕤ",
            "(¬▂¬)",
            "█▄▄ ███ █▄▄",
            "(⌐■_■)",
            "✌.|•͡˘‿•͡˘|.✌",
            "[̲̅$̲̅(̲̅ιοο̲̅)̲̅$̲̅]",
            "(｡◕‿‿◕｡)",
            "(ﾉ◕ヮ◕)ﾉ*:･ﾟ✧",
            "٩(｡͡•‿•｡)۶",
            "∩(︶▽︶)∩",
            "☜(ﾟヮﾟ☜)",
            "Ƹ̵̡Ӝ̵̨̄Ʒ",
            "┐(;´༎ຶД༎ຶ`)┌",
            "(✿つ°ヮ°)つ  └⋃┘",
            "(つ°ヮ°)つ  （。Y。）",
            "(✿ ◕‿◕) ᓄ✂╰⋃╯",
            "(つ°ヮ°)つ  (‿|‿)",
            "▄︻̷̿┻̿═━一",
            "(｡♥‿‿♥｡)",
            "╭∩╮（︶︿︶）╭∩╮",
            "<('()))}><{",
            "┐(´～`；)┌",
        ]),
        copy_all: false,
    },
];

/// Named HTML5 entities offered in the "HTML5 Code" submenu, as `(entity, character)`.
pub(super) const HTML_ENTITIES: &[(&str, &str)] = &[
    ("&Ascr;", "𝒜"),
    ("&Bfr;", "𝔅"),
    ("&Cconint;", "∰"),
    ("&Cscr;", "𝒞"),
    ("&Dfr;", "𝔇"),
    ("&Dscr;", "𝒟"),
    ("&Ffr;", "𝔉"),
    ("&Gscr;", "𝒢"),
    ("&Hat;", "^"),
    ("&Jscr;", "𝒥"),
    ("&Kscr;", "𝒦"),
    ("&Ll;", "⋘"),
    ("&Mfr;", "𝔐"),
    ("&Nscr;", "𝒩"),
    ("&Oscr;", "𝒪"),
    ("&Pscr;", "𝒫"),
    ("&Qscr;", "𝒬"),
    ("&Sscr;", "𝒮"),
    ("&Tscr;", "𝒯"),
    ("&Uscr;", "𝒰"),
    ("&Vscr;", "𝒱"),
    ("&Wscr;", "𝒲"),
    ("&Xscr;", "𝒳"),
    ("&Yscr;", "𝒴"),
    ("&Zscr;", "𝒵"),
    ("&acute;", "´"),
    ("&aleph;", "ℵ"),
    ("&alpha;", "α"),
    ("&apid;", "≋"),
    ("&ast;", "*"),
    ("&beta;", "β"),
    ("&boxbox;", "⧉"),
    ("&bull;", "•"),
    ("&ccupssm;", "⩐"),
    ("&cent;", "¢"),
    ("&check;", "✓"),
    ("&commat;", "@"),
    ("&copy;", "©"),
    ("&copysr;", "℗"),
    ("&cross;", "✗"),
    ("&curren;", "¤"),
    ("&dagger;", "†"),
    ("&delta;", "δ"),
    ("&diam;", "⋄"),
    ("&elinters;", "⏧"),
    ("&epsi;", "ε"),
    ("&equiv;", "≡"),
    ("&equivDD;", "⩸"),
    ("&euro;", "€"),
    ("&female;", "♀"),
    ("&frac13;", "⅓"),
    ("&frac14;", "¼"),
    ("&frac15;", "⅕"),
    ("&frac16;", "⅙"),
    ("&frac18;", "⅛"),
    ("&frac23;", "⅔"),
    ("&frac25;", "⅖"),
    ("&frac34;", "¾"),
    ("&frac35;", "⅗"),
    ("&frac38;", "⅜"),
    ("&frac45;", "⅘"),
    ("&frac56;", "⅚"),
    ("&frac58;", "⅝"),
    ("&frac78;", "⅞"),
    ("&gamma;", "γ"),
    ("&ggg;", "⋙"),
    ("&half;", "½"),
    ("&hercon;", "⊹"),
    ("&incare;", "℅"),
    ("&infin;", "∞"),
    ("&lambda;", "λ"),
    ("&laquo;", "«"),
    ("&lowast;", "∗"),
    ("&macr;", "¯"),
    ("&male;", "♂"),
    ("&malt;", "✠"),
    ("&mdash;", "—"),
    ("&micro;", "µ"),
    ("&mu;", "μ"),
    ("&nequiv;", "≢"),
    ("&numero;", "№"),
    ("&oast;", "⊛"),
    ("&ofcir;", "⦿"),
    ("&ominus;", "⊖"),
    ("&oplus;", "⊕"),
    ("&otimes;", "⊗"),
    ("&para;", "¶"),
    ("&phone;", "☎"),
    ("&pi;", "π"),
    ("&pound;", "£"),
    ("&psi;", "ψ"),
    ("&radic;", "√"),
    ("&raquo;", "»"),
    ("&reg;", "®"),
    ("&sect;", "§"),
    ("&star;", "☆"),
    ("&starf;", "★"),
    ("&sup2;", "²"),
    ("&sup3;", "³"),
    ("&target;", "⌖"),
    ("&theta;", "θ"),
    ("&times;", "×"),
    ("&twixt;", "≬"),
    ("&yen;", "¥"),
    ("&zhcy;", "ж"),
];
