//! Static content catalogue: art, colour masks, depths and collision rules.
//!
//! Pure data. Glyph blocks use `?` for cells that must stay transparent even
//! inside an outline; masks use the colour codes understood by
//! [`crate::fb::Attr::from_code`], with digits as placeholders that spawn
//! functions replace by random colours.

use crate::collision::CollisionRule;
use crate::entities::EntityKind;

/// Draw depths. Smaller is closer to the viewer.
pub mod depth {
    pub const SHARK: i32 = 2;
    pub const FISH_START: i32 = 3;
    pub const FISH_END: i32 = 20;
    pub const SEAWEED: i32 = 21;
    pub const CASTLE: i32 = 22;

    /// Waterline segments, top to bottom.
    pub const WATER_LINES: [i32; 4] = [8, 6, 4, 2];
    pub const WATER_GAP1: i32 = 7;
    pub const WATER_GAP2: i32 = 5;
}

/// First row below the water surface.
pub const UNDERWATER_ROW: i32 = 9;

/// Row of the top waterline segment.
pub const WATERLINE_ROW: i32 = 5;

/// Colours substituted for mask placeholder digits.
pub const RANDOM_COLORS: [char; 12] = ['c', 'C', 'r', 'R', 'y', 'Y', 'b', 'B', 'g', 'G', 'm', 'M'];

/// Which kinds strike which.
pub const COLLISION_RULES: [CollisionRule; 2] = [
    CollisionRule::new(EntityKind::Teeth, EntityKind::Fish),
    CollisionRule::new(EntityKind::Bubble, EntityKind::Waterline),
];

/// Travel direction along the x axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Right => 1.0,
            Direction::Left => -1.0,
        }
    }
}

/// A glyph block and its colour mask.
#[derive(Clone, Copy, Debug)]
pub struct Art {
    pub glyphs: &'static str,
    pub mask: &'static str,
}

/// Single-frame art for both travel directions.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub right: Art,
    pub left: Art,
}

impl Sprite {
    pub fn facing(&self, dir: Direction) -> Art {
        match dir {
            Direction::Right => self.right,
            Direction::Left => self.left,
        }
    }
}

/// Multi-frame art sharing one mask per direction.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedSprite {
    pub right: &'static [&'static str],
    pub right_mask: &'static str,
    pub left: &'static [&'static str],
    pub left_mask: &'static str,
}

impl AnimatedSprite {
    pub fn facing(&self, dir: Direction) -> (&'static [&'static str], &'static str) {
        match dir {
            Direction::Right => (self.right, self.right_mask),
            Direction::Left => (self.left, self.left_mask),
        }
    }
}

// ── Scenery ───────────────────────────────────────────────────────────────────

pub const WATERLINE: [&str; 4] = [
    "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    "^^^^ ^^^  ^^^   ^^^     ^^^^     ",
    "^^^^      ^^^^     ^^^     ^^     ",
    "^^      ^^^^       ^^^     ^^^^^^ ",
];

pub const CASTLE: Art = Art {
    glyphs: r#"
                T~~
                |
               /^\
              /   \
  _   _   _  /     \  _   _   _
 [ ]_[ ]_[ ]/ _   _ \[ ]_[ ]_[ ]
 |_=__-_ =_|_[ ]_[ ]_|_=-___-__|
  | _- =  | =_ = _    |= _=   |
  |= -[]  |- = _ =    |_-=_[] |
  | =_    |= - ___    | =_ =  |
  |=  []- |-  /| |\   |=_ =[] |
  |- =_   | =| | | |  |- = -  |
  |_______|__|_|_|_|__|_______|
"#,
    mask: r#"
                RR

              yyy
             y   y
            y     y
           y       y



              yyy
             yy yy
            y y y y
            yyyyyyy
"#,
};

pub const BUBBLE: [&str; 3] = [".", "o", "O"];

/// Five shrinking splat frames drawn with `ch`; the last one is blank.
pub fn splat_frames(ch: char) -> [String; 5] {
    let c = ch;
    [
        format!("\n\n   {c}\n  {c}{c}{c}\n   '\n"),
        format!("\n\n  \"{c};`\n \"{c},{c}{c}\n {c}\"'~'\n"),
        format!("\n  , ,\n \" \",\"'\n {c}\" {c}'\"\n  \" ; .\n"),
        format!("\n{c} ' , ' `\n' ` {c} . '\n ' `' \",{c}\n{c} ' \" {c} .\n\" {c} ', '\n"),
        " ".to_string(),
    ]
}

// ── Fish ──────────────────────────────────────────────────────────────────────
//
// Mask digits: 1 body, 2 dorsal fin, 3 flippers, 4 eye, 5 mouth, 6 tail,
// 7 gills.

pub const MODERN_FISH: [Sprite; 4] = [
    Sprite {
        right: Art {
            glyphs: r#"
  \
 / \
>=_('>
 \_/
  /
"#,
            mask: r#"
  2
 1 1
663745
 111
  3
"#,
        },
        left: Art {
            glyphs: r#"
  /
 / \
<')_=<
 \_/
  \
"#,
            mask: r#"
  3
 111
547366
 1 1
  2
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
    ,
    }\
\  .'  `\
}}<   ( 6>
/  `,  .'
    }/
    '
"#,
            mask: r#"
    2
    22
6  11  11
661   7 45
6  11  11
    33
    3
"#,
        },
        left: Art {
            glyphs: r#"
      ,
     /{
 /'  `.  /
<6 )   >{{
 `.  ,'  \
     \{
      `
"#,
            mask: r#"
      2
     22
11  11  6
54 7   166
11  11  6
     33
      3
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
            \'`.
             )  \
(`.??????_.-`' ' '`-.
 \ `.??.`        (o) \_
  >  ><     (((       (
 / .`??`._      /_|  /'
(.`???????`-. _  _.-`
            /__/'
"#,
            mask: r#"
            1111
             1  1
111??????11111 1 1111
 1 11??11        141 11
  1  11     777       5
 1 11??111      333  11
111???????111 1  1111
            11111
"#,
        },
        left: Art {
            glyphs: r#"
       .'`/
      /  (
  .-'` ` `'-._??????.')
_/ (o)        '.??.' /
)       )))     ><  <
`\  |_\      _.'??'. \
  '-._  _ .-'???????'.)
      `\__\
"#,
            mask: r#"
       1111
      1  1
  1111 1 11111??????111
11 141        11??11 1
5       777     11  1
11  333      111??11 1
  1111  1 111???????111
      11111
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
      ,--,_
__    _\.---'-.
\ '.-"     // o\
/_.'-._    \\  /
       `"--(/"`
"#,
            mask: r#"
      22222
66    121111211
6 6111     77 41
6661111    77  1
       11113311
"#,
        },
        left: Art {
            glyphs: r#"
    _,--,
 .-'---./_    __
/o \\     "-.' /
\  //    _.-'._\
 `"\)--"`
"#,
            mask: r#"
    22222
 112111121    66
14 77     1116 6
1  77    1111666
 11331111
"#,
        },
    },
];

pub const CLASSIC_FISH: [Sprite; 8] = [
    Sprite {
        right: Art {
            glyphs: r#"
       \
     ...\..,
\  /'       \
 >=     (  ' >
/  \      / /
    `"'"'/''
"#,
            mask: r#"
       2
     1112111
6  11       1
 66     7  4 5
6  1      3 1
    11111311
"#,
        },
        left: Art {
            glyphs: r#"
      /
  ,../...
 /       '\  /
< '  )     =<
 \ \      /  \
  `'\'"'"'
"#,
            mask: r#"
      2
  1112111
 1       11  6
5 4  7     66
 1 3      1  6
  11311111
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
    \
\ /--\
>=  (o>
/ \__/
    /
"#,
            mask: r#"
    2
6 1111
66  745
6 1111
    3
"#,
        },
        left: Art {
            glyphs: r#"
  /
 /--\ /
<o)  =<
 \__/ \
  \
"#,
            mask: r#"
  2
 1111 6
547  66
 1111 6
  3
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
       \:.
\;,   ,;\\\,,
  \\\;;:::::::o
  ///;;::::::::<
 /;` ``/////``
"#,
            mask: r#"
       222
666   1122211
  6661111111114
  66611111111115
 666 113333311
"#,
        },
        left: Art {
            glyphs: r#"
      .:/
   ,,///;,   ,;/
 o:::::::;;///
>::::::::;;\\\
  ''\\\\\\\\'' ';\
"#,
            mask: r#"
      222
   1122211   666
 4111111111666
51111111111666
  113333311 666
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
  __
><_'>
   '
"#,
            mask: r#"
  11
61145
   3
"#,
        },
        left: Art {
            glyphs: r#"
 __
<'_><
 `
"#,
            mask: r#"
 11
54116
 3
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
   ..\,
>='   ('>
  '''/''
"#,
            mask: r#"
   1121
661   745
  111311
"#,
        },
        left: Art {
            glyphs: r#"
  ,/..
<')   `=<
 ``\```
"#,
            mask: r#"
  1211
547   166
 113111
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
   \
  / \
>=_('>
  \_/
   /
"#,
            mask: r#"
   2
  1 1
661745
  111
   3
"#,
        },
        left: Art {
            glyphs: r#"
  /
 / \
<')_=<
 \_/
  \
"#,
            mask: r#"
  2
 1 1
547166
 111
  3
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
  ,\
>=('>
  '/
"#,
            mask: r#"
  12
66745
  13
"#,
        },
        left: Art {
            glyphs: r#"
 /,
<')=<
 \`
"#,
            mask: r#"
 21
54766
 31
"#,
        },
    },
    Sprite {
        right: Art {
            glyphs: r#"
  __
\/ o\
/\__/
"#,
            mask: r#"
  11
61 41
61111
"#,
        },
        left: Art {
            glyphs: r#"
 __
/o \/
\__/\
"#,
            mask: r#"
 11
14 16
11116
"#,
        },
    },
];

// ── Shark ─────────────────────────────────────────────────────────────────────

pub const SHARK: Sprite = Sprite {
    right: Art {
        glyphs: r#"
                              __
                             ( `\
  ,??????????????????????????)   `\
;' `.????????????????????????(     `\__
 ;   `.?????????????__..---''          `~~~~-._
  `.   `.____...--''                       (b  `--._
    >                     _.-'      .((      ._     )
  .`.-`--...__         .-'     -.___.....-(|/|/|/|/'
 ;.'?????????`. ...----`.___.',,,_______......---'
 '???????????'-'
"#,
        mask: r#"





                                           cR

                                          cWWWWWWWW


"#,
    },
    left: Art {
        glyphs: r#"
                     __
                    /' )
                  /'   (??????????????????????????,
              __/'     )????????????????????????.' `;
      _.-~~~~'          ``---..__?????????????.'   ;
 _.--'  b)                       ``--...____.'   .'
(     _.      )).      `-._                     <
 `\|\|\|\|)-.....___.-     `-.         __...--'-.'.
   `---......_______,,,`.___.'----... .'?????????`.;
                                     `-`???????????`
"#,
        mask: r#"





        Rc

  WWWWWWWWc


"#,
    },
};

/// Strike point of the shark's teeth relative to its top-left corner.
pub fn teeth_offset(dir: Direction) -> (f64, f64) {
    match dir {
        Direction::Right => (44.0, 7.0),
        Direction::Left => (9.0, 7.0),
    }
}

// ── Ship ──────────────────────────────────────────────────────────────────────

pub const SHIP: Sprite = Sprite {
    right: Art {
        glyphs: r#"
     |    |    |
    )_)  )_)  )_)
   )___))___))___)\
  )____)____)_____)\\
_____|____|____|____\\\__
\                   /
"#,
        mask: r#"
     y    y    y

                  w
                   ww
yyyyyyyyyyyyyyyyyyyywwwyy
y                   y
"#,
    },
    left: Art {
        glyphs: r#"
         |    |    |
        (_(  (_(  (_(
      /(___((___((___(
    //(_____(____(____(
__///____|____|____|_____
    \                   /
"#,
        mask: r#"
         y    y    y

      w
    ww
yywwwyyyyyyyyyyyyyyyyyyyy
    y                   y
"#,
    },
};

// ── Whale ─────────────────────────────────────────────────────────────────────

pub const WHALE: Sprite = Sprite {
    right: Art {
        glyphs: r#"
        .-----:
      .'       `.
,????/       (o) \
\`._/          ,__)
"#,
        mask: r#"
             C C
           CCCCCCC
           C  C  C
        BBBBBBB
      BB       BB
B    B       BWB B
BBBBB          BBBB
"#,
    },
    left: Art {
        glyphs: r#"
    :-----.
  .'       `.
 / (o)       \????,
(__,          \_.'/
"#,
        mask: r#"
   C C
 CCCCCCC
 C  C  C
    BBBBBBB
  BB       BB
 B BWB       B    B
BBBB          BBBBB
"#,
    },
};

/// Water spout frames; each is three rows tall.
pub const WHALE_SPOUT: [&str; 13] = [
    "\n\n",
    "\n\n",
    "\n\n",
    "\n\n",
    "\n\n",
    "\n\n   :",
    "\n   :\n   :",
    "  . .\n  -:-\n   :",
    "  . .\n .-:-.\n   :",
    "  . .\n'.-:-.`\n'  :  '",
    "\n .- -.\n;  :  ;",
    "\n\n;     ;",
    "\n\n",
];

/// Spout column offset from the whale's left edge.
pub fn spout_offset(dir: Direction) -> usize {
    match dir {
        Direction::Right => 11,
        Direction::Left => 1,
    }
}

/// Rows every spout frame occupies above the whale.
pub const SPOUT_ROWS: usize = 3;

// ── Sea monster ───────────────────────────────────────────────────────────────

pub const MODERN_MONSTER: AnimatedSprite = AnimatedSprite {
    right: &[
        r#"
         _???_?????????????????????_???_???????_a_a
       _{.`=`.}_??????_???_??????_{.`=`.}_????{/ ''\_
 _????{.'  _  '.}????{.`'`.}????{.'  _  '.}??{|  ._oo)
{ \??{/  .'?'.  \}??{/ .-. \}??{/  .'?'.  \}?{/  |
"#,
        r#"
                      _???_????????????????????_a_a
  _??????_???_??????_{.`=`.}_??????_???_??????{/ ''\_
 { \????{.`'`.}????{.'  _  '.}????{.`'`.}????{|  ._oo)
  \ \??{/ .-. \}??{/  .'?'.  \}??{/ .-. \}???{/  |
"#,
    ],
    right_mask: r#"
                                            W W



"#,
    left: &[
        r#"
   a_a_???????_???_?????????????????????_???_
 _/'' \}????_{.`=`.}_??????_???_??????_{.`=`.}_
(oo_.  |}??{.'  _  '.}????{.`'`.}????{.'  _  '.}????_
    |  \}?{/  .'?'.  \}??{/ .-. \}??{/  .'?'.  \}??/ }
"#,
        r#"
   a_a_????????????????????_???_
 _/'' \}??????_???_??????_{.`=`.}_??????_???_??????_
(oo_.  |}????{.`'`.}????{.'  _  '.}????{.`'`.}????/ }
    |  \}???{/ .-. \}??{/  .'?'.  \}??{/ .-. \}??/ /
"#,
    ],
    left_mask: r#"
    W W



"#,
};

pub const CLASSIC_MONSTER: AnimatedSprite = AnimatedSprite {
    right: &[
        r#"
                                                          ____
            __??????????????????????????????????????????/   o  \
          /    \????????_????????????????????_???????/     ____ >
  _??????|  __  |?????/   \????????_????????/   \????|     |
 | \?????|  ||  |????|     |?????/   \?????|     |???|     |
"#,
        r#"
                                                          ____
                                             __?????????/   o  \
             _?????????????????????_????????/    \?????/     ____ >
   _???????/   \????????_????????/   \????|  __  |???|     |
  | \?????|     |?????/   \?????|     |???|  ||  |???|     |
"#,
        r#"
                                                          ____
                                  __????????????????????/   o  \
 _??????????????????????_????????/    \????????_???????/     ____ >
| \??????????_????????/   \????|  __  |?????/   \????|     |
 \ \???????/   \?????|     |???|  ||  |????|     |???|     |
"#,
        r#"
                                                          ____
                 __???????????????????????????????????/   o  \
  _??????????_????????/    \????????_????????????????/     ____ >
  | \???????/   \????|  __  |?????/   \????????_?????|     |
   \ \?????|     |???|  ||  |????|     |?????/   \???|     |
"#,
    ],
    right_mask: r#"

                                                            W



"#,
    left: &[
        r#"
    ____
  /  o   \??????????????????????????????????????????__
< ____     \????????_????????????????????_????????/    \
      |     |????/   \????????_????????/   \?????|  __  |??????_
      |     |???|     |?????/   \?????|     |????|  ||  |?????/ |
"#,
        r#"
    ____
  /  o   \?????????__
< ____     \?????/    \????????_?????????????????????_
      |     |???|  __  |????/   \????????_????????/   \???????_
      |     |???|  ||  |???|     |?????/   \?????|     |?????/ |
"#,
        r#"
    ____
  /  o   \????????????????????__
< ____     \???????_????????/    \????????_??????????????????????_
      |     |????/   \?????|  __  |????/   \????????_??????????/ |
      |     |???|     |????|  ||  |???|     |?????/   \???????/ /
"#,
        r#"
    ____
  /  o   \???????????????????????????????????__
< ____     \??????????????????_????????/    \????????_??????????_
      |     |??????_????????/   \?????|  __  |????/   \???????/ |
      |     |????/   \?????|     |????|  ||  |???|     |?????/ /
"#,
    ],
    left_mask: r#"

     W



"#,
};

// ── Big fish ──────────────────────────────────────────────────────────────────
//
// Mask digits: 1 body, 2 highlights, W eye.

pub const BIG_FISH_1: Sprite = Sprite {
    right: Art {
        glyphs: r#"
 ______
`""-.  `````-----.....__
     `.  .      .       `-.
       :     .     .       `.
 ,?????:   .    .          _ :
: `.???:                  (@) `._
 `. `..'     .     =`-.       .__)
   ;     .        =  ~  :     .-"
 .' .'`.   .    .  =.-'  `._ .'
: .'???:               .   .'
 '???.'  .    .     .   .-'
   .'____....----''.'=.'
   ""?????????????.'.'
               ''"'`
"#,
        mask: r#"
 111111
11111  11111111111111111
     11  2      2       111
       1     2     2       11
 1     1   2    2          1 1
1 11   1                  1W1 111
 11 1111     2     1111       1111
   1     2        1  1  1     111
 11 1111   2    2  1111  111 11
1 11   1               2   11
 11   11  2    2     2  111
   111111111111111111111
   11             1111
               11111
"#,
    },
    left: Art {
        glyphs: r#"
                          ______
          __.....-----'''''  .-""'
       .-'       .      .  .'
     .'       .     .     :
    : _          .    .   :?????,
 _.' (@)                  :???.' :
(__.       .-'=     .     `..' .'
 "-.     :  ~  =        .     ;
   `. _.'  `-.=  .    .   .'`. `.
     `.   .               :???`. :
       `-.   .     .    .  `.???`
          `.=`.``----....____`.
            `.`.?????????????""
              '`"``
"#,
        mask: r#"
                          111111
          11111111111111111  11111
       111       2      2  11
     11       2     2     1
    1 1          2    2   1     1
 111 1W1                  1   11 1
1111       1111     2     1111 11
 111     1  1  1        2     1
   11 111  1111  2    2   1111 11
     11   2               1   11 1
       111   2     2    2  11   11
          111111111111111111111
            1111             11
              11111
"#,
    },
};

pub const BIG_FISH_2: Sprite = Sprite {
    right: Art {
        glyphs: r#"
              _ _ _
           .='\ \ \`"=,
         .'\ \ \ \ \ \ \
\'=._?????/ \ \ \_\_\_\_\_\
\'=._'.??/\ \,-"`- _ - _ - '-.
 \`=._\|'.\/- _ - _ - _ - _- \
 ;"= ._\=./_ -_ -_ {`"=_    @ \
  ;"=_-_=- _ -  _ - {"=_"-     \
  ;_=_--_.,          {_.='   .-/
 ;.="` / ';\        _.    _.-`
 /_.='/ \/ /;._ _ _{.-;`/"`
/._=_.'???'/ / / / /{.= /
/.=' ??????`'./_/_.=`{_/
"#,
        mask: r#"
              1 1 1
           11111 1 11111
         11 1 1 1 1 1 1 1
11111     1 1 1 1111111111
111111 11 1 1111112 2 2 2 2 111
 1111111111112 2 2 2 2 2 2 22 1
 111 11111111112 22 22 11111    W 1
  1111111111111112 2 2  2 2 111111    1
  11111111111111111          11111   111
 11111 1 111111        11    1111
 1111111 11 1111 1 1 11111111
1111111   11 1 1 1 11111 1
1111 111111111111111111111
"#,
    },
    left: Art {
        glyphs: r#"
           _ _ _
       ,="`/ / /'=.
      / / / / / / /'.
     /_/_/_/_/_/ / / \?????_.='/
   .-' - _ - _ -`"-,/ /\??.'_.='/
  / -_ - _ - _ - _ -\/.'|/_.=`/
 / @    _="`} _- _- _\.=/_. =";
/     -"_="} - _  - _ -=_-_"=;
\-.   '=._}          ,._--_=_;
 `-._     ._        /;' \ `"=.;
     `"\`;-.}_ _ _.;\ \/ \'=._\
       \ =.}\ \ \ \ \'???'._=_.\
        \_}`=._\_\.'`??????' '=.\
"#,
        mask: r#"
           1 1 1
       11111 1 11111
      1 1 1 1 1 1 11
     1111111111 1 1 1     11111
   111 2 2 2 2 2111111 11 111111
  1 22 2 2 2 2 2 2 21111111111111
 1 W    11111 22 22 21111111111 111
1     111111 2 2  2 2 2111111111111111
111   11111          11111111111111111
 1111    11        111111 1 11111
     11111111 1 1 1111 11 1111111
       1 11111 1 1 1 11   1111111
        111111111111111111111 1111
"#,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Frame;

    #[test]
    fn waterline_segments_are_single_rows() {
        for seg in WATERLINE {
            assert!(!seg.is_empty());
            assert!(!seg.contains('\n'));
        }
    }

    #[test]
    fn every_fish_has_art_in_both_directions() {
        for sprite in MODERN_FISH.iter().chain(CLASSIC_FISH.iter()) {
            for dir in [Direction::Right, Direction::Left] {
                let frame = Frame::new(sprite.facing(dir).glyphs);
                assert!(frame.width() > 0);
                assert!(frame.height() > 0);
            }
        }
    }

    #[test]
    fn monster_directions_have_matching_frame_counts() {
        for monster in [MODERN_MONSTER, CLASSIC_MONSTER] {
            assert_eq!(monster.right.len(), monster.left.len());
        }
    }

    #[test]
    fn splat_ends_blank() {
        let frames = splat_frames('*');
        assert!(frames[0].contains('*'));
        assert_eq!(frames[4].trim(), "");
    }
}
