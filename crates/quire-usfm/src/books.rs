//! Canonical book table and passage display.

/// One book of the canon: internal id, USFM code and English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub usfm: &'static str,
    pub english: &'static str,
}

impl Book {
    const fn new(id: i32, usfm: &'static str, english: &'static str) -> Self {
        Self { id, usfm, english }
    }
}

const BOOKS: &[Book] = &[
    Book::new(1, "GEN", "Genesis"),
    Book::new(2, "EXO", "Exodus"),
    Book::new(3, "LEV", "Leviticus"),
    Book::new(4, "NUM", "Numbers"),
    Book::new(5, "DEU", "Deuteronomy"),
    Book::new(6, "JOS", "Joshua"),
    Book::new(7, "JDG", "Judges"),
    Book::new(8, "RUT", "Ruth"),
    Book::new(9, "1SA", "1 Samuel"),
    Book::new(10, "2SA", "2 Samuel"),
    Book::new(11, "1KI", "1 Kings"),
    Book::new(12, "2KI", "2 Kings"),
    Book::new(13, "1CH", "1 Chronicles"),
    Book::new(14, "2CH", "2 Chronicles"),
    Book::new(15, "EZR", "Ezra"),
    Book::new(16, "NEH", "Nehemiah"),
    Book::new(17, "EST", "Esther"),
    Book::new(18, "JOB", "Job"),
    Book::new(19, "PSA", "Psalms"),
    Book::new(20, "PRO", "Proverbs"),
    Book::new(21, "ECC", "Ecclesiastes"),
    Book::new(22, "SNG", "Song of Solomon"),
    Book::new(23, "ISA", "Isaiah"),
    Book::new(24, "JER", "Jeremiah"),
    Book::new(25, "LAM", "Lamentations"),
    Book::new(26, "EZK", "Ezekiel"),
    Book::new(27, "DAN", "Daniel"),
    Book::new(28, "HOS", "Hosea"),
    Book::new(29, "JOL", "Joel"),
    Book::new(30, "AMO", "Amos"),
    Book::new(31, "OBA", "Obadiah"),
    Book::new(32, "JON", "Jonah"),
    Book::new(33, "MIC", "Micah"),
    Book::new(34, "NAM", "Nahum"),
    Book::new(35, "HAB", "Habakkuk"),
    Book::new(36, "ZEP", "Zephaniah"),
    Book::new(37, "HAG", "Haggai"),
    Book::new(38, "ZEC", "Zechariah"),
    Book::new(39, "MAL", "Malachi"),
    Book::new(40, "MAT", "Matthew"),
    Book::new(41, "MRK", "Mark"),
    Book::new(42, "LUK", "Luke"),
    Book::new(43, "JHN", "John"),
    Book::new(44, "ACT", "Acts"),
    Book::new(45, "ROM", "Romans"),
    Book::new(46, "1CO", "1 Corinthians"),
    Book::new(47, "2CO", "2 Corinthians"),
    Book::new(48, "GAL", "Galatians"),
    Book::new(49, "EPH", "Ephesians"),
    Book::new(50, "PHP", "Philippians"),
    Book::new(51, "COL", "Colossians"),
    Book::new(52, "1TH", "1 Thessalonians"),
    Book::new(53, "2TH", "2 Thessalonians"),
    Book::new(54, "1TI", "1 Timothy"),
    Book::new(55, "2TI", "2 Timothy"),
    Book::new(56, "TIT", "Titus"),
    Book::new(57, "PHM", "Philemon"),
    Book::new(58, "HEB", "Hebrews"),
    Book::new(59, "JAS", "James"),
    Book::new(60, "1PE", "1 Peter"),
    Book::new(61, "2PE", "2 Peter"),
    Book::new(62, "1JN", "1 John"),
    Book::new(63, "2JN", "2 John"),
    Book::new(64, "3JN", "3 John"),
    Book::new(65, "JUD", "Jude"),
    Book::new(66, "REV", "Revelation"),
    Book::new(67, "FRT", "Front Matter"),
    Book::new(68, "BAK", "Back Matter"),
    Book::new(69, "OTH", "Other Material"),
    Book::new(70, "TOB", "Tobit"),
    Book::new(71, "JDT", "Judith"),
    Book::new(72, "ESG", "Esther (Greek)"),
    Book::new(73, "WIS", "Wisdom of Solomon"),
    Book::new(74, "SIR", "Sirach"),
    Book::new(75, "BAR", "Baruch"),
    Book::new(76, "LJE", "Letter of Jeremiah"),
    Book::new(77, "S3Y", "Song of the Three Children"),
    Book::new(78, "SUS", "Susanna"),
    Book::new(79, "BEL", "Bel and the Dragon"),
    Book::new(80, "1MA", "1 Maccabees"),
    Book::new(81, "2MA", "2 Maccabees"),
    Book::new(82, "1ES", "1 Esdras (Greek)"),
    Book::new(83, "MAN", "Prayer of Manasses"),
    Book::new(84, "PS2", "Psalm 151"),
    Book::new(85, "3MA", "3 Maccabees"),
    Book::new(86, "2ES", "2 Esdras (Latin)"),
    Book::new(87, "4MA", "4 Maccabees"),
    Book::new(88, "DAG", "Daniel (Greek)"),
    Book::new(89, "ODA", "Odes"),
    Book::new(90, "PSS", "Psalms of Solomon"),
    Book::new(91, "EZA", "Ezra Apocalypse"),
    Book::new(92, "5EZ", "5 Ezra"),
    Book::new(93, "6EZ", "6 Ezra"),
    Book::new(94, "PS3", "Psalms 152-155"),
    Book::new(95, "2BA", "2 Baruch (Apocalypse)"),
    Book::new(96, "LBA", "Letter of Baruch"),
    Book::new(97, "JUB", "Jubilees"),
    Book::new(98, "ENO", "Enoch"),
    Book::new(99, "1MQ", "1 Meqabyan/Mekabis"),
    Book::new(100, "2MQ", "2 Meqabyan/Mekabis"),
    Book::new(101, "3MQ", "3 Meqabyan/Mekabis"),
    Book::new(102, "REP", "Reproof"),
    Book::new(103, "4BA", "4 Baruch"),
    Book::new(104, "LAO", "Letter to the Laodiceans"),
    Book::new(105, "INT", "Introduction Matter"),
    Book::new(106, "CNC", "Concordance"),
    Book::new(107, "GLO", "Glossary / Wordlist"),
    Book::new(108, "TDX", "Topical Index"),
    Book::new(109, "NDX", "Names Index"),
];

/// All known books in id order.
pub fn books() -> &'static [Book] {
    BOOKS
}

/// Internal id for a USFM book code such as `GEN`, or `0` when unknown.
///
/// Matching ignores case and surrounding whitespace.
pub fn book_id_from_usfm(code: &str) -> i32 {
    let code = code.trim();
    BOOKS
        .iter()
        .find(|book| book.usfm.eq_ignore_ascii_case(code))
        .map_or(0, |book| book.id)
}

pub fn book_by_id(id: i32) -> Option<&'static Book> {
    BOOKS.iter().find(|book| book.id == id)
}

/// English name of a book, or `"Unknown"` for an unknown id.
pub fn english_name(id: i32) -> &'static str {
    book_by_id(id).map_or("Unknown", |book| book.english)
}

/// Human readable passage reference, e.g. `Genesis 1:1`.
pub fn passage_display(book: i32, chapter: i32, verse: &str) -> String {
    format!("{} {chapter}:{verse}", english_name(book))
}
