use storyline_core::step::{ContentVariant, Step};

pub const CLAUDEMD_TRACE: [Step; 5] = [
    Step::new(
        "Understand",
        "Task: \"Add a new API endpoint for user creation following our patterns\"\n\n\
         Reading CLAUDE.md...\n  \
         \u{2192} Auth: all endpoints use requireAuth() middleware\n  \
         \u{2192} Validation: Zod schemas in src/schemas/\n  \
         \u{2192} Error handling: AppError class with structured codes",
    )
    .with_variant(ContentVariant::Terminal)
    .with_description(
        "Claude reads the project's CLAUDE.md file to learn the team's coding standards \
         before writing a single line.",
    ),
    Step::new(
        "Plan",
        "Files to create:\n  src/routes/users.ts\n  src/schemas/user.ts\n  \
         src/routes/__tests__/users.test.ts",
    )
    .with_description(
        "With project context, Claude creates a plan that matches existing conventions exactly.",
    ),
    Step::new(
        "Edit",
        "// src/routes/users.ts\n\
         +import { requireAuth } from '@/middleware/auth';\n\
         +import { CreateUserSchema } from '@/schemas/user';\n\
         -router.post('/users', handler);\n\
         +export default Router().use(requireAuth('admin'));",
    )
    .with_variant(ContentVariant::Diff)
    .with_description(
        "The generated code includes authentication, input validation and audit logging \
         on the first try.",
    ),
    Step::new(
        "Test",
        "PASS  src/routes/__tests__/users.test.ts (6 tests)\n  \
         \u{2713} rejects unauthenticated requests (401)\n  \
         \u{2713} validates request body with CreateUserSchema\n\n\
         Tests:    6 passed, 6 total\n\
         Coverage: 100% of new code",
    )
    .with_variant(ContentVariant::Terminal)
    .with_description("Six tests generated covering security, validation and edge cases."),
    Step::new(
        "Ship",
        "PR #247: Add user creation endpoint\n\nReviewers: @backend-team",
    )
    .with_description("Ready for review in one iteration instead of several."),
];
