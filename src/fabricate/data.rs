//! Embedded sample-data pools used by the fabrication rules.

pub const MALE_FIRST_NAMES: &[&str] = &[
    "James", "Robert", "John", "Michael", "David", "William", "Richard", "Joseph", "Thomas",
    "Daniel", "Matthew", "Anthony", "Mark", "Paul", "Steven", "Andrew", "Kenneth", "Joshua",
    "Kevin", "Brian", "Timothy", "Ronald", "Jason", "Edward",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
    "Karen", "Sarah", "Lisa", "Nancy", "Sandra", "Betty", "Ashley", "Emily", "Kimberly",
    "Margaret", "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Thompson", "White",
    "Harris", "Clark", "Lewis", "Robinson", "Walker", "Young", "King",
];

pub const COMPANY_NAMES: &[&str] = &[
    "Acme Corp",
    "Globex GmbH",
    "Initech LLC",
    "Umbrella Trading",
    "Stark Industries",
    "Wayne Enterprises",
    "Hooli Inc",
    "Vandelay Imports",
    "Wonka Logistics",
    "Cyberdyne Systems",
    "Tyrell Holdings",
    "Pied Piper AG",
    "Aperture Labs",
    "Soylent Foods",
    "Oscorp Ventures",
    "Dunder Mifflin",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "mail.test",
    "inbox.test",
    "post.test",
];

pub const STREET_NAMES: &[&str] = &[
    "Birch Avenue", "Cedar Lane", "Chestnut Street", "Elm Drive", "Highland Road",
    "Hillcrest Avenue", "Lakeview Terrace", "Maple Street", "Meadow Lane", "Mill Road",
    "Oak Street", "Orchard Way", "Park Avenue", "Pine Street", "Ridge Road",
    "River Road", "Spring Street", "Sunset Boulevard", "Walnut Street", "Willow Court",
];

pub const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Fairview", "Franklin", "Greenville", "Bristol",
    "Clinton", "Madison", "Georgetown", "Salem", "Ashland", "Oxford", "Arlington",
    "Burlington", "Manchester", "Milton", "Newport", "Dayton", "Lexington", "Winchester",
];

pub const COUNTRY_CODES: &[&str] = &[
    "DE", "US", "GB", "FR", "NL", "AT", "CH", "IT", "ES", "SE", "DK", "NO", "FI", "BE",
    "PL", "CZ", "PT", "IE", "CA", "AU",
];

pub const PRODUCT_ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded", "Tasty",
];

pub const PRODUCT_MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal",
    "Soft", "Fresh", "Frozen",
];

pub const PRODUCT_NAMES: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
    "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish",
    "Cheese", "Bacon", "Pizza", "Salad", "Sausages", "Chips",
];

pub const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "aliquip",
];
