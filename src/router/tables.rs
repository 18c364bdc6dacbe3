//! Fixed lookup tables consumed by the command cascade
//!
//! All of these are static data: subject syllabus PDFs, curated learning
//! videos, the video search categories, the prewritten topic responses, and
//! the broader keyword table. Declaration order is load-bearing wherever a
//! rule scans a table front to back.

/// Subject syllabus PDFs with their trigger aliases
///
/// Scanned in order; the first subject with a matching alias wins. The
/// two-letter aliases are deliberately permissive substrings.
pub const SUBJECT_PDFS: &[SubjectPdf] = &[
    SubjectPdf {
        subject: "cse",
        aliases: &["cse", "computer science"],
        url: "https://jntuh.ac.in/uploads/academic_regulations/R22-B.Tech-Syllabus-CSE.pdf",
    },
    SubjectPdf {
        subject: "ece",
        aliases: &["ece", "electronics"],
        url: "https://jntuh.ac.in/uploads/academic_regulations/R22-B.Tech-Syllabus-ECE.pdf",
    },
    SubjectPdf {
        subject: "mech",
        aliases: &["mech", "mechanical"],
        url: "https://jntuh.ac.in/uploads/academic_regulations/R22-B.Tech-Syllabus-MECH.pdf",
    },
    SubjectPdf {
        subject: "civil",
        aliases: &["civil"],
        url: "https://jntuh.ac.in/uploads/academic_regulations/R22-B.Tech-Syllabus-CIVIL.pdf",
    },
    SubjectPdf {
        subject: "it",
        aliases: &["it", "information technology"],
        url: "https://jntuh.ac.in/uploads/academic_regulations/R22-B.Tech-Syllabus-IT.pdf",
    },
];

/// One subject entry in the syllabus PDF table
pub struct SubjectPdf {
    /// Canonical short subject name
    pub subject: &'static str,
    /// Substrings that select this subject
    pub aliases: &'static [&'static str],
    /// Fixed syllabus PDF URL
    pub url: &'static str,
}

/// Curated full-course learning videos keyed by technology keyword
pub const CURATED_VIDEOS: &[CuratedVideo] = &[
    CuratedVideo {
        keyword: "python",
        id: "rfscVS0vtbw",
        title: "Python Full Course for Beginners",
    },
    CuratedVideo {
        keyword: "java",
        id: "eIrMbAQSU34",
        title: "Java Full Course for Beginners",
    },
    CuratedVideo {
        keyword: "c",
        id: "KJgsSFOSQv0",
        title: "C Programming Full Course for Beginners",
    },
    CuratedVideo {
        keyword: "c++",
        id: "8jLOx1hD3_o",
        title: "C++ Full Course for Beginners",
    },
    CuratedVideo {
        keyword: "javascript",
        id: "W6NZfCO5SIk",
        title: "JavaScript Full Course for Beginners",
    },
    CuratedVideo {
        keyword: "sql",
        id: "HXV3zeQKqGY",
        title: "SQL Full Course for Beginners",
    },
    CuratedVideo {
        keyword: "html",
        id: "kUMe1FH4CHE",
        title: "HTML Full Course for Beginners",
    },
    CuratedVideo {
        keyword: "css",
        id: "1PnVor36_40",
        title: "CSS Full Course for Beginners",
    },
];

/// One curated learning video
pub struct CuratedVideo {
    /// Technology keyword that selects this video
    pub keyword: &'static str,
    /// Video identifier
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
}

/// A selectable video in a search category
pub struct VideoChoice {
    /// Video identifier
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
}

/// One video search category
pub struct VideoCategory {
    /// Category name matched by substring
    pub name: &'static str,
    /// Candidate videos; one is picked pseudo-randomly
    pub videos: &'static [VideoChoice],
}

/// Category used when a video request matches no category
pub const FALLBACK_CATEGORY: &str = "entertainment";

/// Video search categories, scanned in order
pub const VIDEO_CATEGORIES: &[VideoCategory] = &[
    VideoCategory {
        name: "comedy",
        videos: &[
            VideoChoice { id: "9bZkp7q19f0", title: "Best Comedy Compilation" },
            VideoChoice { id: "hFZFjoX2cGg", title: "Funny Moments Collection" },
            VideoChoice { id: "y6120QOlsfU", title: "Comedy Gold" },
        ],
    },
    VideoCategory {
        name: "music",
        videos: &[
            VideoChoice { id: "kJQP7kiw5Fk", title: "Best Music Mix" },
            VideoChoice { id: "fJ9rUzIMcZQ", title: "Top Hits Playlist" },
            VideoChoice { id: "ktvTqknDobU", title: "Music Collection" },
        ],
    },
    VideoCategory {
        name: "funny",
        videos: &[
            VideoChoice { id: "9bZkp7q19f0", title: "Hilarious Compilation" },
            VideoChoice { id: "hFZFjoX2cGg", title: "Funny Videos" },
            VideoChoice { id: "y6120QOlsfU", title: "Comedy Central" },
        ],
    },
    VideoCategory {
        name: "entertainment",
        videos: &[
            VideoChoice { id: "kJQP7kiw5Fk", title: "Entertainment Tonight" },
            VideoChoice { id: "fJ9rUzIMcZQ", title: "Fun Videos" },
            VideoChoice { id: "ktvTqknDobU", title: "Best Entertainment" },
        ],
    },
    VideoCategory {
        name: "movie",
        videos: &[
            VideoChoice { id: "9bZkp7q19f0", title: "Movie Trailers" },
            VideoChoice { id: "hFZFjoX2cGg", title: "Film Highlights" },
            VideoChoice { id: "y6120QOlsfU", title: "Cinema Collection" },
        ],
    },
    VideoCategory {
        name: "dance",
        videos: &[
            VideoChoice { id: "kJQP7kiw5Fk", title: "Best Dance Moves" },
            VideoChoice { id: "fJ9rUzIMcZQ", title: "Dance Compilation" },
            VideoChoice { id: "ktvTqknDobU", title: "Dancing Videos" },
        ],
    },
    VideoCategory {
        name: "sports",
        videos: &[
            VideoChoice { id: "9bZkp7q19f0", title: "Sports Highlights" },
            VideoChoice { id: "hFZFjoX2cGg", title: "Best Sports Moments" },
            VideoChoice { id: "y6120QOlsfU", title: "Athletic Compilation" },
        ],
    },
    VideoCategory {
        name: "gaming",
        videos: &[
            VideoChoice { id: "kJQP7kiw5Fk", title: "Gaming Highlights" },
            VideoChoice { id: "fJ9rUzIMcZQ", title: "Best Gaming Moments" },
            VideoChoice { id: "ktvTqknDobU", title: "Game Reviews" },
        ],
    },
];

/// One prewritten curated topic response
pub struct CuratedTopic {
    /// Keyword matched by substring in either direction
    pub keyword: &'static str,
    /// Response title
    pub title: &'static str,
    /// Prewritten structured body, emitted verbatim under the title
    pub content: &'static str,
}

/// Curated topics with full prewritten responses, scanned in order
pub const CURATED_TOPICS: &[CuratedTopic] = &[
    CuratedTopic {
        keyword: "ai",
        title: "Artificial Intelligence (AI)",
        content: "\
## What is AI?
Artificial Intelligence (AI) is the simulation of human intelligence in machines. These systems can perform tasks that typically require human intelligence, such as learning, reasoning, and problem-solving.

## Core Components
• **Machine Learning** - Algorithms that improve through experience
• **Natural Language Processing** - Understanding and generating human language
• **Computer Vision** - Interpreting and analyzing visual information
• **Robotics** - Physical interaction with the environment
• **Expert Systems** - Knowledge-based decision making

## Real-World Applications
• **Virtual Assistants** - Siri, Alexa, Google Assistant
• **Autonomous Vehicles** - Self-driving cars and drones
• **Healthcare** - Medical diagnosis and drug discovery
• **Finance** - Fraud detection and algorithmic trading
• **Entertainment** - Content recommendations on Netflix, Spotify

## Types of AI
1. **Narrow AI (ANI)** - Specialized for specific tasks (current technology)
2. **General AI (AGI)** - Human-level intelligence across all domains
3. **Super AI (ASI)** - Intelligence exceeding human capabilities

## Benefits & Challenges
**Benefits:**
• Increased efficiency and productivity
• 24/7 availability
• Reduced human error
• Cost savings

**Challenges:**
• Job displacement concerns
• Privacy and security issues
• Ethical considerations
• Need for regulation",
    },
    CuratedTopic {
        keyword: "machine learning",
        title: "Machine Learning (ML)",
        content: "\
## What is Machine Learning?
Machine Learning is a subset of AI that enables computers to learn and make decisions from data without being explicitly programmed for every scenario.

## How It Works
1. **Data Collection** - Gather relevant information
2. **Data Preparation** - Clean and organize the data
3. **Model Training** - Algorithm learns from the data
4. **Testing** - Evaluate model performance
5. **Deployment** - Use the model for predictions

## Types of Learning
• **Supervised Learning** - Learning with labeled examples (like a teacher)
• **Unsupervised Learning** - Finding hidden patterns in data
• **Reinforcement Learning** - Learning through trial and error with rewards
• **Semi-supervised Learning** - Combination of labeled and unlabeled data

## Popular Algorithms
• **Linear Regression** - Predicting continuous values
• **Decision Trees** - Making decisions through yes/no questions
• **Neural Networks** - Mimicking brain-like processing
• **Random Forest** - Combining multiple decision trees
• **Support Vector Machines** - Finding optimal boundaries

## Practical Applications
• **Image Recognition** - Photo tagging, medical imaging
• **Speech Recognition** - Voice assistants, transcription
• **Recommendation Systems** - Amazon, YouTube suggestions
• **Fraud Detection** - Banking security
• **Predictive Analytics** - Weather forecasting, stock prices",
    },
    CuratedTopic {
        keyword: "python",
        title: "Python Programming Language",
        content: "\
## What is Python?
Python is a high-level, interpreted programming language created by Guido van Rossum in 1991. It's designed to be easy to read and write, making it perfect for beginners and experts alike.

## Why Choose Python?
• **Simple Syntax** - Reads almost like English
• **Versatile** - Works for web, data science, AI, automation
• **Large Community** - Extensive support and resources
• **Rich Libraries** - Pre-built tools for almost everything
• **Cross-Platform** - Runs on Windows, Mac, Linux

## Essential Libraries
• **NumPy** - Mathematical operations and arrays
• **Pandas** - Data manipulation and analysis
• **Matplotlib/Seaborn** - Data visualization
• **Django/Flask** - Web development frameworks
• **TensorFlow/PyTorch** - Machine learning and AI
• **Requests** - HTTP requests and API interactions

## Career Opportunities
• **Data Scientist** - Analyze data to find insights
• **Web Developer** - Build websites and web applications
• **AI/ML Engineer** - Develop intelligent systems
• **DevOps Engineer** - Automate infrastructure
• **Software Developer** - Create desktop applications

## Getting Started
1. Install Python from python.org
2. Learn basic syntax (variables, loops, functions)
3. Practice with small projects
4. Explore libraries relevant to your interests
5. Join Python communities and forums",
    },
    CuratedTopic {
        keyword: "javascript",
        title: "JavaScript Programming Language",
        content: "\
## What is JavaScript?
JavaScript is a dynamic programming language that brings websites to life. Originally created for web browsers, it now powers servers, mobile apps, and desktop applications.

## Key Characteristics
• **Dynamic Typing** - Variables can hold different data types
• **Event-Driven** - Responds to user interactions
• **Interpreted** - No compilation needed
• **Flexible** - Multiple programming paradigms
• **Asynchronous** - Handle multiple tasks simultaneously

## Frontend Frameworks
• **React** - Facebook's library for user interfaces
• **Vue.js** - Progressive framework for building UIs
• **Angular** - Google's full-featured framework
• **Svelte** - Compile-time optimized framework

## Backend Technologies
• **Node.js** - JavaScript runtime for servers
• **Express.js** - Minimal web application framework
• **MongoDB** - NoSQL database (often used with JS)
• **Socket.io** - Real-time communication

## What You Can Build
• **Interactive Websites** - Dynamic user experiences
• **Web Applications** - Gmail, Facebook, Twitter
• **Mobile Apps** - React Native, Ionic
• **Desktop Apps** - Electron (VS Code, Discord)
• **Games** - Browser-based and mobile games

## Learning Path
1. **Basics** - Variables, functions, DOM manipulation
2. **ES6+** - Modern JavaScript features
3. **Async Programming** - Promises, async/await
4. **Framework** - Choose React, Vue, or Angular
5. **Backend** - Learn Node.js for full-stack development",
    },
];

/// One entry in the broader keyword table
pub struct KeywordTopic {
    /// Keyword matched by substring
    pub keyword: &'static str,
    /// Domain category interpolated into the template
    pub category: &'static str,
    /// Short description interpolated into the template
    pub description: &'static str,
}

/// Broader keyword table for templated topic responses, scanned in order
pub const KEYWORD_TOPICS: &[KeywordTopic] = &[
    KeywordTopic { keyword: "html", category: "Web Technology", description: "markup language for web pages" },
    KeywordTopic { keyword: "css", category: "Web Technology", description: "styling language for web design" },
    KeywordTopic { keyword: "react", category: "Frontend Framework", description: "JavaScript library for user interfaces" },
    KeywordTopic { keyword: "vue", category: "Frontend Framework", description: "progressive JavaScript framework" },
    KeywordTopic { keyword: "angular", category: "Frontend Framework", description: "full-featured web framework" },
    KeywordTopic { keyword: "node", category: "Backend Technology", description: "JavaScript runtime for servers" },
    KeywordTopic { keyword: "express", category: "Backend Framework", description: "minimal web framework for Node.js" },
    KeywordTopic { keyword: "mongodb", category: "Database", description: "NoSQL document database" },
    KeywordTopic { keyword: "mysql", category: "Database", description: "relational database management system" },
    KeywordTopic { keyword: "postgresql", category: "Database", description: "advanced relational database" },
    KeywordTopic { keyword: "git", category: "Version Control", description: "distributed version control system" },
    KeywordTopic { keyword: "github", category: "Platform", description: "code hosting and collaboration platform" },
    KeywordTopic { keyword: "docker", category: "DevOps Tool", description: "containerization platform" },
    KeywordTopic { keyword: "kubernetes", category: "DevOps Tool", description: "container orchestration system" },
    KeywordTopic { keyword: "aws", category: "Cloud Platform", description: "Amazon Web Services cloud computing" },
    KeywordTopic { keyword: "azure", category: "Cloud Platform", description: "Microsoft cloud computing platform" },
    KeywordTopic { keyword: "blockchain", category: "Technology", description: "distributed ledger technology" },
    KeywordTopic { keyword: "cryptocurrency", category: "Digital Currency", description: "digital or virtual currency" },
    KeywordTopic { keyword: "bitcoin", category: "Cryptocurrency", description: "first and largest cryptocurrency" },
    KeywordTopic { keyword: "ethereum", category: "Blockchain Platform", description: "decentralized computing platform" },
    KeywordTopic { keyword: "cybersecurity", category: "Security", description: "protection of digital systems" },
    KeywordTopic { keyword: "data science", category: "Field", description: "extracting insights from data" },
    KeywordTopic { keyword: "big data", category: "Technology", description: "large and complex datasets" },
    KeywordTopic { keyword: "cloud computing", category: "Technology", description: "on-demand computing services" },
    KeywordTopic { keyword: "iot", category: "Technology", description: "Internet of Things connected devices" },
    KeywordTopic { keyword: "5g", category: "Network Technology", description: "fifth generation mobile network" },
    KeywordTopic { keyword: "quantum computing", category: "Computing", description: "quantum mechanical computing" },
    KeywordTopic { keyword: "virtual reality", category: "Technology", description: "immersive digital environments" },
    KeywordTopic { keyword: "augmented reality", category: "Technology", description: "enhanced real-world experiences" },
];
