/// Built-in category table, in declaration order.
pub const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Python",
        &[
            "python",
            "pandas",
            "numpy",
            "matplotlib",
            "seaborn",
            "plotly",
            "tensorflow",
            "pytorch",
            "keras",
            "scikit-learn",
            "flask",
            "django",
            "fastapi",
            "machine learning",
            "deep learning",
            "data science",
            "data analysis",
            "data engineering",
            "ai",
            "nlp",
            "computer vision",
        ],
    ),
    (
        "TypeScript",
        &["typescript", "javascript", "react", "nextjs", "nodejs", "express"],
    ),
    ("Java", &["java", "spring boot"]),
    ("Database", &["sql", "mysql", "postgresql", "mongodb", "redis"]),
    (
        "Web",
        &["html", "css", "react", "nextjs", "rest api", "graphql"],
    ),
    (
        "DevOps",
        &[
            "docker",
            "kubernetes",
            "devops",
            "git",
            "github actions",
            "linux",
            "bash",
            "aws",
            "azure",
            "gcp",
            "cloud",
        ],
    ),
    (
        "Other",
        &[
            "c++",
            "c",
            "power bi",
            "tableau",
            "excel",
            "blockchain",
            "cybersecurity",
            "microservices",
            "firebase",
        ],
    ),
];
