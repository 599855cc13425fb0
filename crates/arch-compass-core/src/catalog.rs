//! Built-in pattern catalog.
//!
//! One well-known pattern per [`Category`], used to seed a fresh database
//! and as a ready-made catalog for the in-memory store.

use crate::models::{
    ArchitecturePattern, Category, Characteristics, Level, TeamSize, TimeToMarket,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The six seed patterns, ordered by category.
pub fn builtin_catalog() -> Vec<ArchitecturePattern> {
    vec![
        ArchitecturePattern {
            id: "monolithic".to_string(),
            name: "Monolithic Architecture".to_string(),
            category: Category::Monolithic,
            description: "A single deployable unit containing all application functionality, \
                          sharing one codebase and usually one database."
                .to_string(),
            pros: strings(&[
                "Simple to develop, test, and deploy",
                "In-process calls keep latency low",
                "Straightforward transactions and data consistency",
            ]),
            cons: strings(&[
                "Scales only as a whole",
                "Codebase becomes harder to change as it grows",
                "One technology stack for everything",
            ]),
            use_cases: strings(&["MVPs and prototypes", "Small internal tools", "Early-stage startups"]),
            technology_stack: strings(&["Rails", "Django", "Spring Boot", "PostgreSQL"]),
            characteristics: Characteristics {
                complexity: Level::Low,
                scalability: Level::Low,
                maintainability: Level::Medium,
                performance: Level::High,
                cost: Level::Low,
                team_size: TeamSize::Small,
                time_to_market: TimeToMarket::Fast,
                security: Level::Medium,
            },
        },
        ArchitecturePattern {
            id: "microservices".to_string(),
            name: "Microservices".to_string(),
            category: Category::Microservices,
            description: "Independently deployable services organised around business \
                          capabilities, each owning its data."
                .to_string(),
            pros: strings(&[
                "Services scale and deploy independently",
                "Teams own services end to end",
                "Fault isolation between services",
            ]),
            cons: strings(&[
                "Distributed-systems complexity",
                "Operational overhead for deployment and monitoring",
                "Cross-service consistency is hard",
            ]),
            use_cases: strings(&[
                "Large platforms with many teams",
                "Systems with uneven load across features",
            ]),
            technology_stack: strings(&["Kubernetes", "gRPC", "Kafka", "Istio"]),
            characteristics: Characteristics {
                complexity: Level::High,
                scalability: Level::High,
                maintainability: Level::High,
                performance: Level::Medium,
                cost: Level::High,
                team_size: TeamSize::Large,
                time_to_market: TimeToMarket::Slow,
                security: Level::Medium,
            },
        },
        ArchitecturePattern {
            id: "serverless".to_string(),
            name: "Serverless".to_string(),
            category: Category::Serverless,
            description: "Functions executed on demand by a managed platform, billed per \
                          invocation with no servers to operate."
                .to_string(),
            pros: strings(&[
                "Automatic scaling to zero and back",
                "Pay only for what runs",
                "No infrastructure to manage",
            ]),
            cons: strings(&[
                "Cold-start latency",
                "Vendor lock-in",
                "Harder local testing and debugging",
            ]),
            use_cases: strings(&["Event-triggered jobs", "Spiky or unpredictable traffic", "APIs for mobile backends"]),
            technology_stack: strings(&["AWS Lambda", "Azure Functions", "Cloudflare Workers", "DynamoDB"]),
            characteristics: Characteristics {
                complexity: Level::Medium,
                scalability: Level::High,
                maintainability: Level::Medium,
                performance: Level::Medium,
                cost: Level::Low,
                team_size: TeamSize::Small,
                time_to_market: TimeToMarket::Fast,
                security: Level::Medium,
            },
        },
        ArchitecturePattern {
            id: "event-driven".to_string(),
            name: "Event-Driven Architecture".to_string(),
            category: Category::EventDriven,
            description: "Components communicate by producing and consuming events through \
                          a broker, decoupling senders from receivers."
                .to_string(),
            pros: strings(&[
                "Loose coupling between producers and consumers",
                "Natural fit for real-time processing",
                "Consumers scale independently",
            ]),
            cons: strings(&[
                "Eventual consistency",
                "Flows are harder to trace and debug",
                "Schema evolution needs discipline",
            ]),
            use_cases: strings(&["IoT telemetry", "Real-time analytics", "Order and payment pipelines"]),
            technology_stack: strings(&["Apache Kafka", "RabbitMQ", "NATS", "AWS EventBridge"]),
            characteristics: Characteristics {
                complexity: Level::High,
                scalability: Level::High,
                maintainability: Level::Medium,
                performance: Level::High,
                cost: Level::Medium,
                team_size: TeamSize::Medium,
                time_to_market: TimeToMarket::Slow,
                security: Level::Medium,
            },
        },
        ArchitecturePattern {
            id: "layered".to_string(),
            name: "Layered (N-Tier) Architecture".to_string(),
            category: Category::Layered,
            description: "Code organised in horizontal layers (presentation, business, \
                          persistence) with dependencies pointing downward."
                .to_string(),
            pros: strings(&[
                "Familiar to most developers",
                "Clear separation of concerns",
                "Layers can be secured and tested separately",
            ]),
            cons: strings(&[
                "Changes often cut through every layer",
                "Risk of anemic pass-through layers",
            ]),
            use_cases: strings(&["Enterprise line-of-business apps", "CRUD-heavy systems"]),
            technology_stack: strings(&[".NET", "Java EE", "Spring MVC", "SQL Server"]),
            characteristics: Characteristics {
                complexity: Level::Low,
                scalability: Level::Medium,
                maintainability: Level::Medium,
                performance: Level::Medium,
                cost: Level::Low,
                team_size: TeamSize::Medium,
                time_to_market: TimeToMarket::Fast,
                security: Level::High,
            },
        },
        ArchitecturePattern {
            id: "hexagonal".to_string(),
            name: "Hexagonal (Ports and Adapters)".to_string(),
            category: Category::Hexagonal,
            description: "Domain logic at the centre, isolated from infrastructure by ports \
                          with swappable adapters."
                .to_string(),
            pros: strings(&[
                "Domain logic testable without infrastructure",
                "Infrastructure can be swapped behind ports",
                "Keeps business rules explicit",
            ]),
            cons: strings(&[
                "More indirection and boilerplate",
                "Steeper learning curve for new developers",
            ]),
            use_cases: strings(&["Long-lived domain-rich systems", "Apps with several delivery channels"]),
            technology_stack: strings(&["Any language", "Dependency injection", "Contract tests"]),
            characteristics: Characteristics {
                complexity: Level::Medium,
                scalability: Level::Medium,
                maintainability: Level::High,
                performance: Level::Medium,
                cost: Level::Medium,
                team_size: TeamSize::Medium,
                time_to_market: TimeToMarket::Medium,
                security: Level::High,
            },
        },
    ]
}
