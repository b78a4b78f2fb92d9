//! The static content catalog: every category the site publishes, its
//! hand-written articles, and the stub topic titles used to pad a category
//! out to its target article count. This is literal data, authored once and
//! never mutated; the emitter consumes it exactly once per run.

/// A fully authored article. `sections` is an ordered heading-to-prose
/// mapping; the order is the display order.
pub struct RichArticle {
    pub title: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub sections: &'static [(&'static str, &'static str)],
    pub tags: &'static [&'static str],
}

/// A category of articles. `key` doubles as the output directory name.
/// `topics` are stub titles; their sections are synthesized at render time
/// by [`generic_sections`].
pub struct Category {
    pub key: &'static str,
    pub display: &'static str,
    pub target_count: usize,
    pub articles: &'static [RichArticle],
    pub topics: &'static [&'static str],
}

impl Category {
    /// The number of articles the category can actually supply. Emission
    /// stops at `min(target_count, supply)`.
    pub fn supply(&self) -> usize {
        self.articles.len() + self.topics.len()
    }
}

/// The byline pool. Authors are assigned pseudo-randomly per article.
pub const AUTHORS: &[&str] = &[
    "Dr. Sarah Mitchell",
    "Prof. James Chen",
    "Dr. Maya Patel",
    "Alex Rodriguez",
    "Dr. Emily Thompson",
    "Prof. David Kim",
    "Dr. Rachel Foster",
    "Michael Zhang",
];

/// Synthesizes the section mapping for a stub article from its title.
pub fn generic_sections(title: &str) -> Vec<(String, String)> {
    let lower = title.to_lowercase();
    vec![
        (
            "Introduction".to_owned(),
            format!(
                "This article explores {}, examining its historical context, current state, and future implications.",
                lower
            ),
        ),
        (
            "Historical Background".to_owned(),
            format!(
                "Understanding {} requires examining its origins and how it has evolved over time.",
                lower
            ),
        ),
        (
            "Current State".to_owned(),
            format!(
                "Today, {} represents an important area of study and practice with significant real-world applications.",
                lower
            ),
        ),
        (
            "Key Concepts".to_owned(),
            format!(
                "Several fundamental ideas underpin our understanding of {} and shape how we approach it.",
                lower
            ),
        ),
        (
            "Challenges and Controversies".to_owned(),
            format!(
                "Like any complex topic, {} faces various challenges and raises important questions.",
                lower
            ),
        ),
        (
            "Future Directions".to_owned(),
            format!(
                "Looking ahead, {} will likely continue to evolve and influence society in significant ways.",
                lower
            ),
        ),
        (
            "Conclusion".to_owned(),
            format!(
                "In summary, {} remains a vital area deserving continued attention and study.",
                lower
            ),
        ),
    ]
}

pub const CATALOG: &[Category] = &[
    Category {
        key: "philosophy",
        display: "Philosophy",
        target_count: 20,
        articles: &[
            RichArticle {
                title: "The Nature of Consciousness: Exploring the Hard Problem",
                slug: "nature-of-consciousness",
                description: "An in-depth exploration of consciousness, qualia, and why subjective experience remains one of philosophy's greatest mysteries.",
                sections: &[
                    ("Introduction", "Consciousness represents perhaps the most profound mystery in philosophy and neuroscience. Despite remarkable advances in our understanding of the brain, the question of how physical processes give rise to subjective experience\u{2014}what philosophers call \"qualia\"\u{2014}remains largely unanswered."),
                    ("The Hard Problem", "Philosopher David Chalmers famously distinguished between the \"easy\" and \"hard\" problems of consciousness. While the easy problems involve explaining cognitive functions and behaviors, the hard problem asks: why is there something it is like to be conscious? Why doesn't all this information processing go on \"in the dark,\" without any inner experience?"),
                    ("Theories of Consciousness", "Multiple theories attempt to explain consciousness. Integrated Information Theory (IIT) suggests consciousness arises from integrated information. Global Workspace Theory proposes consciousness emerges from a \"broadcasting\" mechanism in the brain. Panpsychism argues consciousness is a fundamental property of matter itself."),
                    ("The Explanatory Gap", "The explanatory gap refers to the difficulty in explaining how physical processes produce phenomenal states. Even if we fully understand neural correlates of consciousness, we may still wonder why these processes feel like something from the inside."),
                    ("Implications", "Understanding consciousness has profound implications for artificial intelligence, ethics, and our understanding of reality itself. If we create conscious machines, what moral obligations would we have? How do we test for consciousness?"),
                    ("Conclusion", "The nature of consciousness remains an open question that bridges philosophy, neuroscience, and physics. As we develop new tools and theories, we may finally bridge the explanatory gap\u{2014}or discover that consciousness requires entirely new ways of thinking about reality."),
                ],
                tags: &["Consciousness", "Philosophy of Mind", "Qualia", "Hard Problem"],
            },
            RichArticle {
                title: "Ethics in the Age of Artificial Intelligence",
                slug: "ethics-artificial-intelligence",
                description: "Examining the ethical frameworks we need to guide AI development and deployment in an increasingly automated world.",
                sections: &[
                    ("Introduction", "As artificial intelligence systems become more capable and autonomous, we face unprecedented ethical challenges. From self-driving cars making life-or-death decisions to AI systems influencing employment and criminal justice, we must develop robust ethical frameworks."),
                    ("The Trolley Problem Redux", "Classic ethical dilemmas like the trolley problem take on new urgency when we must program moral decisions into autonomous systems. Should a self-driving car prioritize passengers or pedestrians? Who bears responsibility when AI makes harmful decisions?"),
                    ("Bias and Fairness", "AI systems can perpetuate and amplify existing biases. Facial recognition systems show higher error rates for certain demographics. Hiring algorithms may discriminate based on protected characteristics. Ensuring fairness requires careful design and ongoing monitoring."),
                    ("Transparency and Explainability", "As AI systems make important decisions affecting people's lives, we need explainability. \"Black box\" algorithms that cannot explain their reasoning pose challenges for accountability and trust."),
                    ("Autonomy and Human Dignity", "Excessive reliance on AI decision-making may undermine human autonomy and dignity. We must balance efficiency with preserving meaningful human control and judgment."),
                    ("Conclusion", "Ethical AI development requires multidisciplinary collaboration between ethicists, technologists, policymakers, and the public. We must proactively shape AI development to align with human values and rights."),
                ],
                tags: &["Ethics", "AI Ethics", "Technology", "Moral Philosophy"],
            },
            RichArticle {
                title: "Free Will vs Determinism: Ancient Debate, Modern Implications",
                slug: "free-will-determinism-debate",
                description: "Exploring whether we truly have free will or if our choices are determined by prior causes, and what this means for responsibility.",
                sections: &[
                    ("Introduction", "Do we truly make free choices, or are our decisions predetermined by prior causes? This ancient philosophical question has profound implications for moral responsibility, justice, and how we understand ourselves."),
                    ("The Determinist Position", "Determinism holds that every event, including human decisions, is caused by prior events according to natural laws. If we could know the complete state of the universe at any moment and all natural laws, we could theoretically predict all future events, including human choices."),
                    ("Libertarian Free Will", "Libertarians (in the philosophical sense) argue that humans possess genuine free will\u{2014}the ability to have chosen differently in identical circumstances. This view often invokes quantum indeterminacy or non-physical souls as sources of freedom."),
                    ("Compatibilism", "Compatibilists argue that free will and determinism are compatible. Freedom doesn't require being uncaused, but rather acting according to one's desires and reasons without external coercion. On this view, we can be both determined and free."),
                    ("Neuroscience and Free Will", "Recent neuroscience research, particularly the famous Libet experiments, suggests that brain activity precedes conscious awareness of decisions. However, interpreting these findings remains controversial."),
                    ("Practical Implications", "Our view of free will affects criminal justice, moral responsibility, and personal relationships. If determinism is true, should we still punish criminals? Can we take credit for our achievements?"),
                    ("Conclusion", "The free will debate remains unresolved, but grappling with it deepens our understanding of agency, responsibility, and what it means to be human. Perhaps the answer lies not in absolute freedom or determinism, but in understanding the complex relationship between choice and causation."),
                ],
                tags: &["Free Will", "Determinism", "Moral Responsibility", "Metaphysics"],
            },
        ],
        topics: &[
            "The Trolley Problem and Utilitarian Ethics",
            "Existentialism: Finding Meaning in an Absurd World",
            "The Philosophy of Language: Wittgenstein and Beyond",
            "Eastern Philosophy: Zen, Taoism, and the Way",
            "Plato's Cave: Understanding Reality and Illusion",
            "Kant's Categorical Imperative in Modern Ethics",
            "The Mind-Body Problem: Dualism vs Physicalism",
            "Nietzsche and the Death of God",
            "Stoicism: Ancient Wisdom for Modern Life",
            "The Gettier Problem and the Nature of Knowledge",
            "Phenomenology: The Study of Experience",
            "Social Contract Theory: Hobbes, Locke, and Rousseau",
            "The Is-Ought Problem in Moral Philosophy",
            "Buddhist Philosophy: Suffering and Enlightenment",
            "Aesthetics: The Philosophy of Art and Beauty",
            "The Simulation Hypothesis: Are We Living in a Computer",
            "Political Philosophy: Justice and the Good Society",
        ],
    },
    Category {
        key: "science",
        display: "Science",
        target_count: 20,
        articles: &[
            RichArticle {
                title: "Quantum Entanglement: Spooky Action at a Distance",
                slug: "quantum-entanglement-explained",
                description: "Understanding quantum entanglement, its experimental verification, and implications for our understanding of reality.",
                sections: &[
                    ("Introduction", "Quantum entanglement is one of the most fascinating and counterintuitive phenomena in physics. Einstein famously called it \"spooky action at a distance,\" expressing his discomfort with the idea that measuring one particle could instantly affect another, regardless of distance."),
                    ("What is Entanglement", "When two particles become entangled, their quantum states become correlated in such a way that measuring one particle instantly determines the state of the other, even if they're light-years apart. This happens faster than light could travel between them."),
                    ("Bell's Theorem", "In 1964, physicist John Bell proved that no local hidden variable theory could reproduce all the predictions of quantum mechanics. Subsequent experiments have confirmed Bell's predictions, ruling out local realism."),
                    ("Experimental Verification", "Decades of experiments, including the 2022 Nobel Prize-winning work of Aspect, Clauser, and Zeilinger, have confirmed entanglement. These experiments close various loopholes and demonstrate that quantum mechanics correctly describes nature."),
                    ("Quantum Computing Applications", "Entanglement is fundamental to quantum computing, enabling quantum algorithms that could solve certain problems exponentially faster than classical computers. It's also essential for quantum cryptography and quantum teleportation."),
                    ("Philosophical Implications", "Entanglement challenges our intuitions about locality and realism. It suggests that the universe is fundamentally non-local, and that quantum systems don't have definite properties until measured."),
                    ("Conclusion", "Quantum entanglement represents a radical departure from classical physics. While we can use it technologically and predict its effects mathematically, it continues to challenge our understanding of the nature of reality itself."),
                ],
                tags: &["Quantum Physics", "Entanglement", "Bell's Theorem", "Quantum Computing"],
            },
            RichArticle {
                title: "CRISPR Revolution: The Future of Genetic Engineering",
                slug: "crispr-genetic-engineering-future",
                description: "Exploring CRISPR-Cas9 technology, its applications in medicine and agriculture, and ethical considerations.",
                sections: &[
                    ("Introduction", "CRISPR-Cas9 has revolutionized genetic engineering, making it faster, cheaper, and more precise than ever before. This technology allows scientists to edit genes with unprecedented accuracy, opening possibilities from curing genetic diseases to engineering crops."),
                    ("How CRISPR Works", "CRISPR uses a guide RNA to direct the Cas9 enzyme to specific DNA sequences. Cas9 acts like molecular scissors, cutting the DNA at precise locations. The cell's repair mechanisms then fix the break, allowing scientists to insert, delete, or modify genes."),
                    ("Medical Applications", "CRISPR shows promise for treating genetic disorders like sickle cell disease, muscular dystrophy, and certain cancers. Clinical trials are underway for several conditions, and the first CRISPR therapy was approved in 2023 for sickle cell disease."),
                    ("Agricultural Innovations", "CRISPR enables development of crops resistant to diseases, pests, and climate stress. Unlike traditional GMOs, CRISPR can make precise edits indistinguishable from natural mutations, potentially easing regulatory and public acceptance."),
                    ("Ethical Concerns", "The 2018 case of genetically edited babies in China highlighted ethical concerns about germline editing. Should we edit human embryos? Who decides what traits are \"desirable\"? How do we prevent genetic inequality?"),
                    ("Future Prospects", "Beyond Cas9, scientists are developing new CRISPR variants with improved precision and capabilities, including base editing and prime editing. These advances may enable treatments for previously incurable genetic diseases."),
                    ("Conclusion", "CRISPR represents a powerful tool with enormous potential for human benefit, but also raises profound ethical questions. As the technology advances, society must engage in thoughtful dialogue about its appropriate uses and limitations."),
                ],
                tags: &["CRISPR", "Genetic Engineering", "Biotechnology", "Medicine"],
            },
        ],
        topics: &[
            "Climate Change: The Science and Solutions",
            "The Human Microbiome Revolution",
            "Dark Matter and Dark Energy: The Universe's Mysteries",
            "Neuroplasticity: The Brain's Ability to Rewire",
            "Evolution by Natural Selection: Darwin to Modern Synthesis",
            "The Origin of Life: From Chemistry to Biology",
            "Artificial Photosynthesis: Learning from Plants",
            "The Standard Model of Particle Physics",
            "Epigenetics: Beyond DNA Sequences",
            "Black Holes: From Theory to Image",
            "The Anthropocene: Defining Earth's New Epoch",
            "Synthetic Biology: Engineering Life",
            "The Hubble Constant Tension in Cosmology",
            "Immunotherapy: Harnessing the Immune System Against Cancer",
            "The Mathematics of Chaos Theory",
            "Gravitational Waves: A New Window on the Universe",
            "The Gut-Brain Axis: How Digestion Affects Mind",
        ],
    },
    Category {
        key: "psychology",
        display: "Psychology",
        target_count: 20,
        articles: &[
            RichArticle {
                title: "Understanding Cognitive Biases: How Our Minds Deceive Us",
                slug: "cognitive-biases-mental-shortcuts",
                description: "Exploring common cognitive biases, why they evolved, and how to recognize them in daily decision-making.",
                sections: &[
                    ("Introduction", "Our brains use mental shortcuts (heuristics) to process information quickly. While useful, these shortcuts can lead to systematic errors in judgment called cognitive biases. Understanding these biases helps us make better decisions."),
                    ("Confirmation Bias", "We tend to seek, interpret, and remember information that confirms our existing beliefs while ignoring contradictory evidence. This bias explains why people with opposing views can see the same evidence and reach different conclusions."),
                    ("Availability Heuristic", "We overestimate the probability of events that easily come to mind. Vivid or recent examples disproportionately influence our judgments. This explains why people fear plane crashes more than car accidents, despite statistics."),
                    ("Dunning-Kruger Effect", "People with limited knowledge in a domain tend to overestimate their competence, while experts underestimate theirs. This \"confidence-competence gap\" has significant implications for education and professional development."),
                    ("Sunk Cost Fallacy", "We irrationally continue investing in losing endeavors because we've already invested resources, rather than cutting losses. This affects everything from failed relationships to business projects."),
                    ("Anchoring Bias", "Initial information disproportionately influences subsequent judgments. The first number mentioned in a negotiation or the initial price tag shapes our perception of value."),
                    ("Overcoming Biases", "While we can't eliminate biases, we can mitigate them through awareness, diverse perspectives, structured decision-making processes, and actively seeking disconfirming evidence."),
                    ("Conclusion", "Cognitive biases are features, not bugs\u{2014}they helped our ancestors survive. However, in modern complex environments, they can lead us astray. Recognizing these patterns is the first step toward better judgment."),
                ],
                tags: &["Cognitive Bias", "Psychology", "Decision Making", "Critical Thinking"],
            },
        ],
        topics: &[
            "The Power of Habit: Forming and Breaking Patterns",
            "Growth Mindset vs Fixed Mindset",
            "Emotional Intelligence: Understanding and Managing Emotions",
            "The Psychology of Persuasion: Influence Tactics",
            "Attachment Theory: How Early Bonds Shape Us",
            "Mindfulness and Mental Health",
            "The Placebo Effect: Mind Over Medicine",
            "Developmental Psychology: Stages of Growth",
            "The Science of Happiness: What Really Makes Us Happy",
            "Memory: How We Remember and Forget",
            "Social Psychology: Conformity and Obedience",
            "Personality Theories: From Freud to the Big Five",
            "Trauma and Post-Traumatic Growth",
            "The Psychology of Decision Making",
            "Flow State: The Psychology of Optimal Experience",
            "Behavioral Economics: Irrational Humans",
            "The Dark Triad: Narcissism, Machiavellianism, Psychopathy",
        ],
    },
    Category {
        key: "society",
        display: "Society",
        target_count: 20,
        articles: &[
            RichArticle {
                title: "The Future of Work: Remote, Hybrid, and the Changing Workplace",
                slug: "future-of-work-remote-hybrid",
                description: "Examining how the pandemic accelerated workplace transformation and what it means for employees and organizations.",
                sections: &[
                    ("Introduction", "The COVID-19 pandemic forced the largest remote work experiment in history. As we emerge, organizations are grappling with fundamental questions about where, when, and how work happens."),
                    ("The Remote Work Revolution", "Millions discovered they could work effectively from home. Studies show productivity often increased, while commuting stress decreased. For many knowledge workers, remote work shifted from perk to expectation."),
                    ("Hybrid Models Emerge", "Most organizations are adopting hybrid approaches, combining remote and office work. However, questions remain: Who decides which days are in-office? How do we prevent two-tier systems where remote workers have less opportunity?"),
                    ("Technology's Role", "Video conferencing, collaborative software, and cloud computing make distributed work possible. However, \"Zoom fatigue\" and always-on culture present new challenges requiring deliberate boundaries."),
                    ("Impact on Cities", "Remote work is reshaping urban geography. Some predict \"doom loops\" as offices empty, while others see opportunities for neighborhood revitalization and reduced housing costs in expensive cities."),
                    ("Equity Considerations", "Not all workers can work remotely. Service workers, manufacturing employees, and healthcare providers must be on-site. How do we ensure remote work doesn't exacerbate existing inequalities?"),
                    ("The Future Workplace", "Work is becoming more flexible, asynchronous, and output-focused rather than time-focused. Success will require rethinking management, collaboration, and organizational culture for a distributed world."),
                    ("Conclusion", "The pandemic accelerated trends already underway. While we won't fully return to 2019 work patterns, neither will everyone work remotely. The future likely involves greater choice and flexibility, with organizations competing on workplace experience as much as compensation."),
                ],
                tags: &["Future of Work", "Remote Work", "Workplace Culture", "Productivity"],
            },
        ],
        topics: &[
            "Universal Basic Income: Experiments and Evidence",
            "The Gig Economy: Freedom or Precarity",
            "Education Reform: Preparing Students for the Future",
            "Healthcare Systems: Comparing Global Models",
            "Criminal Justice Reform: Alternatives to Incarceration",
            "The Housing Crisis: Causes and Solutions",
            "Immigration: Economics, Culture, and Policy",
            "Digital Privacy in the Surveillance Age",
            "The Wealth Gap: Causes and Consequences",
            "Gender Equality: Progress and Challenges",
            "Climate Justice: Environmental Equity",
            "The Future of Transportation: Sustainable Mobility",
            "Social Safety Nets in the 21st Century",
            "The Attention Economy: Fighting for Focus",
            "Community Building in Fragmented Society",
            "Mental Health Stigma and Access to Care",
            "The Aging Population: Challenges and Opportunities",
        ],
    },
    Category {
        key: "culture",
        display: "Culture",
        target_count: 20,
        articles: &[
            RichArticle {
                title: "The Evolution of Hip-Hop: From Block Parties to Global Phenomenon",
                slug: "hip-hop-evolution-culture-impact",
                description: "Exploring hip-hop's journey from Bronx block parties to becoming the world's most influential music genre.",
                sections: &[
                    ("Introduction", "Hip-hop emerged in the 1970s Bronx as a cultural movement encompassing MCing, DJing, graffiti, and breakdancing. What began as block parties has evolved into a global cultural force influencing music, fashion, language, and politics."),
                    ("The Birth of Hip-Hop", "DJ Kool Herc's 1973 back-to-school party is often cited as hip-hop's birth. By extending the \"break\" in funk and soul records, Herc created the foundation for a new musical form. Early pioneers like Grandmaster Flash and Afrika Bambaataa refined the art."),
                    ("The Golden Age", "The late 1980s and early 1990s saw hip-hop's \"Golden Age\" with diverse styles emerging: conscious rap (Public Enemy), gangsta rap (N.W.A), jazz rap (A Tribe Called Quest), and alternative hip-hop (De La Soul)."),
                    ("Commercial Explosion", "The 1990s brought mainstream success. Artists like Tupac, Notorious B.I.G., and Jay-Z achieved massive popularity. Hip-hop became a billion-dollar industry, though some argued commercialization diluted its revolutionary roots."),
                    ("Global Influence", "Hip-hop spread worldwide, with distinctive regional scenes emerging in South Korea, France, Brazil, and beyond. Each adapted hip-hop to local languages and cultures while maintaining its core ethos of authentic self-expression."),
                    ("Cultural Impact", "Hip-hop has influenced fashion (streetwear), language (slang entering mainstream usage), and politics (addressing systemic racism and inequality). It's become the lens through which many young people understand and critique society."),
                    ("Conclusion", "From Bronx parties to streaming billions, hip-hop exemplifies cultural innovation and resilience. Its evolution reflects broader changes in technology, race relations, and global connectivity, while maintaining its core commitment to truth-telling and artistic innovation."),
                ],
                tags: &["Hip-Hop", "Music", "Cultural History", "Social Commentary"],
            },
        ],
        topics: &[
            "Street Art: From Vandalism to Fine Art",
            "The Renaissance: Rebirth of Classical Ideals",
            "Japanese Aesthetics: Wabi-Sabi and Minimalism",
            "The Harlem Renaissance: Cultural Explosion",
            "Surrealism: Art of the Unconscious",
            "Indigenous Cultures: Preserving Traditional Knowledge",
            "Film Noir: Style and Substance",
            "The Beat Generation: Counterculture Literature",
            "African Diaspora: Cultural Heritage and Identity",
            "Pop Art: Celebrating Consumer Culture",
            "Latin American Magical Realism",
            "The Arts and Crafts Movement",
            "Modernism in Literature and Art",
            "Cultural Appropriation vs Appreciation",
            "The Influence of Ancient Greece on Western Culture",
            "Punk Rock: Music and Social Movement",
            "The Impressionist Revolution in Art",
        ],
    },
    Category {
        key: "food",
        display: "Food",
        target_count: 20,
        articles: &[
            RichArticle {
                title: "The Science of Fermentation: Ancient Technique, Modern Applications",
                slug: "fermentation-science-applications",
                description: "Understanding fermentation processes, their health benefits, and culinary applications across cultures.",
                sections: &[
                    ("Introduction", "Fermentation is one of humanity's oldest food preservation techniques, transforming ingredients through microbial action. From kimchi to kombucha, fermented foods are experiencing a renaissance driven by health consciousness and culinary innovation."),
                    ("The Science Behind Fermentation", "Fermentation occurs when microorganisms (bacteria, yeasts, molds) break down carbohydrates in the absence of oxygen. Different microbes produce different results: lactic acid bacteria create tangy flavors, yeasts produce alcohol and CO2."),
                    ("Health Benefits", "Fermented foods contain beneficial probiotics that support gut health. Research links healthy gut microbiomes to improved digestion, stronger immunity, better mental health, and reduced inflammation."),
                    ("Cultural Diversity", "Every culture has fermentation traditions: Japanese miso and natto, Korean kimchi, German sauerkraut, Ethiopian injera, and countless others. These foods reflect local ingredients, climate, and tastes."),
                    ("Modern Fermentation Movement", "Chefs and home cooks are rediscovering fermentation, experimenting with novel ingredients and techniques. The movement emphasizes sustainability, flavor development, and connection to traditional foodways."),
                    ("Safety Considerations", "While generally safe, fermentation requires proper technique. Understanding pH levels, salt concentrations, and storage conditions prevents harmful bacterial growth and ensures delicious results."),
                    ("Conclusion", "Fermentation bridges ancient wisdom and modern science. As we better understand the microbiome's role in health, fermented foods are emerging as both culinary delights and functional foods supporting well-being."),
                ],
                tags: &["Fermentation", "Food Science", "Probiotics", "Culinary Techniques"],
            },
        ],
        topics: &[
            "Umami: The Fifth Taste",
            "The Maillard Reaction: Chemistry of Browning",
            "Food Pairing: Science Behind Flavor Combinations",
            "The Mediterranean Diet: Health and Longevity",
            "Molecular Gastronomy: Science Meets Cuisine",
            "The History of Chocolate: From Aztecs to Swiss",
            "Sustainable Fishing and Ocean Conservation",
            "The Spice Trade: History That Shaped the World",
            "Plant-Based Eating: Nutrition and Environment",
            "The Art of Bread Making: Flour, Water, Time",
            "Coffee Science: From Bean to Cup",
            "Food Preservation Throughout History",
            "The Globalization of Cuisine",
            "Wine and Terroir: Geography in a Glass",
            "The Psychology of Taste and Flavor",
            "Organic Farming: Methods and Debates",
            "Street Food Culture Around the World",
        ],
    },
    Category {
        key: "tech",
        display: "Technology",
        target_count: 20,
        articles: &[
            RichArticle {
                title: "The Rise of Large Language Models: From GPT to Beyond",
                slug: "large-language-models-evolution",
                description: "Tracing the development of large language models, their capabilities, limitations, and societal impact.",
                sections: &[
                    ("Introduction", "Large Language Models (LLMs) like GPT-4, Claude, and others represent a paradigm shift in artificial intelligence. These models demonstrate remarkable abilities in language understanding, generation, and reasoning, transforming how we interact with computers."),
                    ("The Transformer Architecture", "The breakthrough came in 2017 with the \"Attention Is All You Need\" paper introducing the Transformer architecture. By using attention mechanisms, transformers can process entire sequences in parallel, enabling training on massive datasets."),
                    ("Scaling Laws", "Research has shown that model capabilities improve predictably with scale\u{2014}more parameters, data, and compute lead to better performance. This has driven the creation of increasingly large models with hundreds of billions of parameters."),
                    ("Emergent Capabilities", "As models scale, they exhibit emergent behaviors not explicitly programmed: few-shot learning, chain-of-thought reasoning, and even theory of mind. These capabilities appear suddenly at certain scale thresholds."),
                    ("Limitations and Risks", "Despite impressive capabilities, LLMs have significant limitations: they can generate plausible-sounding but false information (hallucination), lack true understanding, and may perpetuate biases in their training data. They also raise concerns about misinformation and job displacement."),
                    ("Applications and Impact", "LLMs are transforming numerous fields: code generation, content creation, education, customer service, and research. They're becoming powerful tools for augmenting human intelligence."),
                    ("Conclusion", "Large language models represent a significant advance in AI, but we're still learning their capabilities and limitations. As these systems become more powerful, we must develop appropriate governance frameworks and use them responsibly."),
                ],
                tags: &["AI", "LLM", "GPT", "Machine Learning", "Technology"],
            },
        ],
        topics: &[
            "Blockchain Beyond Cryptocurrency",
            "The Internet of Things: Connecting Everything",
            "Cybersecurity in the Age of Quantum Computing",
            "5G Networks and the Future of Connectivity",
            "Edge Computing: Processing Data Closer to Source",
            "Augmented Reality: Blending Digital and Physical",
            "The Ethics of Facial Recognition Technology",
            "Cloud Computing: Infrastructure as Code",
            "Quantum Computing: Promise and Challenges",
            "The Evolution of Programming Languages",
            "Biometric Security: Beyond Passwords",
            "Green Technology: Sustainable Computing",
            "The Metaverse: Hype or Future",
            "DevOps Culture and Continuous Deployment",
            "Web3: Decentralizing the Internet",
            "Neural Networks: How Deep Learning Works",
            "Open Source Software: Collaboration at Scale",
        ],
    },
    Category {
        key: "politics",
        display: "Politics",
        target_count: 20,
        articles: &[
            RichArticle {
                title: "Democracy in the Digital Age: Social Media and Political Polarization",
                slug: "democracy-digital-age-polarization",
                description: "Analyzing how social media platforms affect democratic discourse, polarization, and the spread of misinformation.",
                sections: &[
                    ("Introduction", "Social media promised to democratize information and empower citizens. Instead, many argue it's created echo chambers, amplified extremism, and undermined democratic institutions. Understanding these dynamics is crucial for preserving democracy."),
                    ("The Filter Bubble Effect", "Algorithmic curation shows users content similar to what they've engaged with before, creating \"filter bubbles\" where people encounter only viewpoints they already agree with. This reduces exposure to diverse perspectives."),
                    ("Amplification of Extremism", "Recommendation algorithms often promote extreme content because it generates more engagement. This can radicalize users and make moderate positions seem unpopular, even when they represent majority views."),
                    ("Misinformation Spread", "False information spreads faster than truth on social media. Emotionally charged misinformation travels particularly quickly, and attempts at correction often fail to reach those who saw the original false claim."),
                    ("Foreign Interference", "State actors use social media to interfere in other nations' politics, spreading propaganda and sowing division. The 2016 U.S. election highlighted vulnerabilities in democratic processes to online manipulation."),
                    ("Platform Responsibility", "Social media companies face difficult questions about content moderation. How do they balance free speech with preventing harm? Who decides what content is acceptable? How transparent should these decisions be?"),
                    ("Path Forward", "Solutions might include algorithmic transparency, digital literacy education, redesigning platforms to reduce polarization, and regulatory frameworks balancing innovation with democratic values."),
                    ("Conclusion", "Social media's impact on democracy is complex and evolving. While these platforms enable new forms of political participation, they also pose serious challenges. Addressing these requires cooperation among platforms, governments, researchers, and citizens."),
                ],
                tags: &["Democracy", "Social Media", "Polarization", "Misinformation"],
            },
        ],
        topics: &[
            "Electoral Systems: Comparing Democracy Models",
            "The Role of Money in Politics",
            "Authoritarianism on the Rise: Global Trends",
            "Climate Policy: International Cooperation",
            "The United Nations: Relevance in the Modern World",
            "Political Movements: From Grassroots to Power",
            "Geopolitical Competition in the Asia-Pacific",
            "Media and Democracy: The Fourth Estate",
            "Populism: Left and Right",
            "The European Union: Integration and Challenges",
            "Voting Rights and Electoral Integrity",
            "Foreign Policy: Realism vs Idealism",
            "The Role of Protest in Democratic Change",
            "Political Polarization: Causes and Remedies",
            "The Supreme Court and Constitutional Interpretation",
            "Diplomacy in the Digital Age",
            "Nuclear Non-Proliferation: Progress and Setbacks",
        ],
    },
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::slug::slugify;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(8, CATALOG.len());
        let keys: HashSet<&str> = CATALOG.iter().map(|c| c.key).collect();
        assert_eq!(CATALOG.len(), keys.len(), "category keys must be unique");
        for category in CATALOG {
            assert!(category.target_count > 0);
            assert!(!category.topics.is_empty());
        }
    }

    #[test]
    fn test_no_slug_collisions_within_categories() {
        // Rich slugs and stub-derived slugs share a namespace per category;
        // the emitter fails hard on a collision, so the shipped catalog must
        // be collision-free.
        for category in CATALOG {
            let mut seen = HashSet::new();
            for article in category.articles {
                assert!(
                    seen.insert(article.slug.to_owned()),
                    "duplicate slug '{}' in '{}'",
                    article.slug,
                    category.key
                );
            }
            for topic in category.topics {
                let slug = slugify(topic);
                assert!(
                    seen.insert(slug.clone()),
                    "duplicate slug '{}' in '{}'",
                    slug,
                    category.key
                );
            }
        }
    }

    #[test]
    fn test_generic_sections_order() {
        let sections = generic_sections("Umami: The Fifth Taste");
        assert_eq!(7, sections.len());
        assert_eq!("Introduction", sections[0].0);
        assert_eq!("Conclusion", sections[6].0);
        assert!(sections[0].1.contains("umami: the fifth taste"));
    }

    #[test]
    fn test_science_supply_falls_short_of_target() {
        let science = CATALOG.iter().find(|c| c.key == "science").unwrap();
        assert_eq!(19, science.supply());
        assert_eq!(20, science.target_count);
    }
}
