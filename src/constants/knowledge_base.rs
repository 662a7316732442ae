use crate::models::domain::gap::EntityCategory;

pub struct KnowledgeSeed {
    pub name: &'static str,
    pub category: EntityCategory,
    pub questions: &'static [&'static str],
    pub answer: &'static str,
    pub distractors: &'static [&'static str],
}

pub const BUILTIN_KNOWLEDGE: &[KnowledgeSeed] = &[
    // Artists
    KnowledgeSeed {
        name: "Drake",
        category: EntityCategory::Artists,
        questions: &[
            "Which Toronto rapper released the 2016 album 'Views'?",
            "Which artist is nicknamed 'Champagne Papi'?",
        ],
        answer: "Drake",
        distractors: &["The Weeknd", "J. Cole", "Kendrick Lamar", "Travis Scott"],
    },
    KnowledgeSeed {
        name: "Taylor Swift",
        category: EntityCategory::Artists,
        questions: &[
            "Which singer released the album '1989'?",
            "Who recorded the 2014 hit 'Shake It Off'?",
        ],
        answer: "Taylor Swift",
        distractors: &["Katy Perry", "Ariana Grande", "Selena Gomez"],
    },
    KnowledgeSeed {
        name: "Bad Bunny",
        category: EntityCategory::Artists,
        questions: &[
            "Which Puerto Rican artist released 'Un Verano Sin Ti'?",
            "Who sang the 2022 hit 'Tití Me Preguntó'?",
        ],
        answer: "Bad Bunny",
        distractors: &["J Balvin", "Daddy Yankee", "Ozuna"],
    },
    KnowledgeSeed {
        name: "Billie Eilish",
        category: EntityCategory::Artists,
        questions: &[
            "Who sang the 2019 hit 'Bad Guy'?",
            "Which singer recorded 'What Was I Made For?' for the Barbie film?",
        ],
        answer: "Billie Eilish",
        distractors: &["Olivia Rodrigo", "Lorde", "Dua Lipa"],
    },
    KnowledgeSeed {
        name: "The Weeknd",
        category: EntityCategory::Artists,
        questions: &[
            "Who released the 2019 single 'Blinding Lights'?",
            "Which artist headlined the Super Bowl LV halftime show?",
        ],
        answer: "The Weeknd",
        distractors: &["Drake", "Bruno Mars", "Post Malone"],
    },
    KnowledgeSeed {
        name: "Ed Sheeran",
        category: EntityCategory::Artists,
        questions: &[
            "Who sang 'Shape of You'?",
            "Which British singer released the album 'Divide' in 2017?",
        ],
        answer: "Ed Sheeran",
        distractors: &["Sam Smith", "Harry Styles", "Lewis Capaldi"],
    },
    // Countries
    KnowledgeSeed {
        name: "Peru",
        category: EntityCategory::Countries,
        questions: &[
            "Which country is home to Machu Picchu?",
            "In which country is the city of Cusco?",
        ],
        answer: "Peru",
        distractors: &["Bolivia", "Chile", "Ecuador"],
    },
    KnowledgeSeed {
        name: "Japan",
        category: EntityCategory::Countries,
        questions: &[
            "Which country is known as the Land of the Rising Sun?",
            "In which country is Mount Fuji?",
        ],
        answer: "Japan",
        distractors: &["China", "South Korea", "Thailand"],
    },
    KnowledgeSeed {
        name: "Brazil",
        category: EntityCategory::Countries,
        questions: &[
            "Which country has won the most FIFA World Cups?",
            "In which country is the city of Rio de Janeiro?",
        ],
        answer: "Brazil",
        distractors: &["Germany", "Argentina", "Italy"],
    },
    KnowledgeSeed {
        name: "Egypt",
        category: EntityCategory::Countries,
        questions: &[
            "Which country is home to the Great Pyramid of Giza?",
            "Through which country does the Suez Canal run?",
        ],
        answer: "Egypt",
        distractors: &["Morocco", "Jordan", "Sudan"],
    },
    KnowledgeSeed {
        name: "Australia",
        category: EntityCategory::Countries,
        questions: &[
            "Which country is home to the Great Barrier Reef?",
            "In which country would you find Uluru?",
        ],
        answer: "Australia",
        distractors: &["New Zealand", "South Africa", "Fiji"],
    },
    // Movies
    KnowledgeSeed {
        name: "Titanic",
        category: EntityCategory::Movies,
        questions: &[
            "Which 1997 film features the line 'I'm the king of the world!'?",
            "Which movie won the Oscar for Best Picture in 1998?",
        ],
        answer: "Titanic",
        distractors: &["Avatar", "The Notebook", "Pearl Harbor"],
    },
    KnowledgeSeed {
        name: "Inception",
        category: EntityCategory::Movies,
        questions: &[
            "Which Christopher Nolan film is set inside layered dreams?",
            "In which movie does a spinning top close the final scene?",
        ],
        answer: "Inception",
        distractors: &["Interstellar", "Tenet", "Memento"],
    },
    KnowledgeSeed {
        name: "Barbie",
        category: EntityCategory::Movies,
        questions: &[
            "Which 2023 film directed by Greta Gerwig stars Margot Robbie?",
            "Which 2023 movie features the song 'I'm Just Ken'?",
        ],
        answer: "Barbie",
        distractors: &["Oppenheimer", "Wonka", "Wish"],
    },
    KnowledgeSeed {
        name: "Frozen",
        category: EntityCategory::Movies,
        questions: &[
            "Which Disney film features the song 'Let It Go'?",
            "In which movie do the sisters Anna and Elsa appear?",
        ],
        answer: "Frozen",
        distractors: &["Tangled", "Moana", "Encanto"],
    },
    // Brands
    KnowledgeSeed {
        name: "Nike",
        category: EntityCategory::Brands,
        questions: &[
            "Which brand uses the 'Just Do It' slogan?",
            "Which company's logo is called the Swoosh?",
        ],
        answer: "Nike",
        distractors: &["Adidas", "Puma", "Reebok"],
    },
    KnowledgeSeed {
        name: "Apple",
        category: EntityCategory::Brands,
        questions: &[
            "Which company makes the iPhone?",
            "Which brand's logo is a bitten fruit?",
        ],
        answer: "Apple",
        distractors: &["Samsung", "Google", "Microsoft"],
    },
    KnowledgeSeed {
        name: "Spotify",
        category: EntityCategory::Brands,
        questions: &[
            "Which streaming app has a green logo with three curved lines?",
            "Which music service sends users a yearly 'Wrapped' summary?",
        ],
        answer: "Spotify",
        distractors: &["Apple Music", "Deezer", "SoundCloud"],
    },
    KnowledgeSeed {
        name: "McDonald's",
        category: EntityCategory::Brands,
        questions: &[
            "Which fast-food chain is known for the Golden Arches?",
            "Which restaurant chain sells the Big Mac?",
        ],
        answer: "McDonald's",
        distractors: &["Burger King", "Wendy's", "KFC"],
    },
];
