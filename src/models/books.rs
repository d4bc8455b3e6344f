//! Catalog of the 66 books with chapter counts and common abbreviations.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Testament {
    Old,
    New,
}

#[derive(Clone, Copy, Debug)]
pub struct Book {
    pub name: &'static str,
    pub chapters: u32,
    pub abbr: &'static str,
    pub testament: Testament,
}

const fn ot(name: &'static str, chapters: u32, abbr: &'static str) -> Book {
    Book {
        name,
        chapters,
        abbr,
        testament: Testament::Old,
    }
}

const fn nt(name: &'static str, chapters: u32, abbr: &'static str) -> Book {
    Book {
        name,
        chapters,
        abbr,
        testament: Testament::New,
    }
}

pub const BOOKS: [Book; 66] = [
    ot("Genesis", 50, "Gen"),
    ot("Exodus", 40, "Exod"),
    ot("Leviticus", 27, "Lev"),
    ot("Numbers", 36, "Num"),
    ot("Deuteronomy", 34, "Deut"),
    ot("Joshua", 24, "Josh"),
    ot("Judges", 21, "Judg"),
    ot("Ruth", 4, "Ruth"),
    ot("1 Samuel", 31, "1 Sam"),
    ot("2 Samuel", 24, "2 Sam"),
    ot("1 Kings", 22, "1 Kgs"),
    ot("2 Kings", 25, "2 Kgs"),
    ot("1 Chronicles", 29, "1 Chr"),
    ot("2 Chronicles", 36, "2 Chr"),
    ot("Ezra", 10, "Ezra"),
    ot("Nehemiah", 13, "Neh"),
    ot("Esther", 10, "Esth"),
    ot("Job", 42, "Job"),
    ot("Psalms", 150, "Ps"),
    ot("Proverbs", 31, "Prov"),
    ot("Ecclesiastes", 12, "Eccl"),
    ot("Song of Solomon", 8, "Song"),
    ot("Isaiah", 66, "Isa"),
    ot("Jeremiah", 52, "Jer"),
    ot("Lamentations", 5, "Lam"),
    ot("Ezekiel", 48, "Ezek"),
    ot("Daniel", 12, "Dan"),
    ot("Hosea", 14, "Hos"),
    ot("Joel", 3, "Joel"),
    ot("Amos", 9, "Amos"),
    ot("Obadiah", 1, "Obad"),
    ot("Jonah", 4, "Jonah"),
    ot("Micah", 7, "Mic"),
    ot("Nahum", 3, "Nah"),
    ot("Habakkuk", 3, "Hab"),
    ot("Zephaniah", 3, "Zeph"),
    ot("Haggai", 2, "Hag"),
    ot("Zechariah", 14, "Zech"),
    ot("Malachi", 4, "Mal"),
    nt("Matthew", 28, "Matt"),
    nt("Mark", 16, "Mark"),
    nt("Luke", 24, "Luke"),
    nt("John", 21, "John"),
    nt("Acts", 28, "Acts"),
    nt("Romans", 16, "Rom"),
    nt("1 Corinthians", 16, "1 Cor"),
    nt("2 Corinthians", 13, "2 Cor"),
    nt("Galatians", 6, "Gal"),
    nt("Ephesians", 6, "Eph"),
    nt("Philippians", 4, "Phil"),
    nt("Colossians", 4, "Col"),
    nt("1 Thessalonians", 5, "1 Thess"),
    nt("2 Thessalonians", 3, "2 Thess"),
    nt("1 Timothy", 6, "1 Tim"),
    nt("2 Timothy", 4, "2 Tim"),
    nt("Titus", 3, "Titus"),
    nt("Philemon", 1, "Phlm"),
    nt("Hebrews", 13, "Heb"),
    nt("James", 5, "Jas"),
    nt("1 Peter", 5, "1 Pet"),
    nt("2 Peter", 3, "2 Pet"),
    nt("1 John", 5, "1 John"),
    nt("2 John", 1, "2 John"),
    nt("3 John", 1, "3 John"),
    nt("Jude", 1, "Jude"),
    nt("Revelation", 22, "Rev"),
];

/// Looks a book up by full name or abbreviation, ignoring case and
/// repeated whitespace.
pub fn find_book(name: &str) -> Option<&'static Book> {
    let wanted = name.split_whitespace().collect::<Vec<_>>().join(" ");
    BOOKS.iter().find(|book| {
        book.name.eq_ignore_ascii_case(&wanted) || book.abbr.eq_ignore_ascii_case(&wanted)
    })
}
