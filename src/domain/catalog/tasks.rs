//! Sprint task catalog.

use crate::domain::models::{Category, Priority, Size, Sprint, TaskDefinition, TaskType};

/// All known tasks, in catalog order.
pub const TASKS: &[TaskDefinition] = &[
    TaskDefinition {
        id: "TASK-001",
        title: "Install and Configure PostgreSQL",
        task_type: TaskType::Chore,
        priority: Priority::P0Critical,
        category: Category::Infrastructure,
        size: Size::S,
        sprint: Sprint::Sprint1,
        description: r#"## Description
Install PostgreSQL 15, create database and user, verify connectivity.

## Acceptance Criteria
- [ ] PostgreSQL 15 installed via Homebrew
- [ ] PostgreSQL service running automatically
- [ ] `devmetrics` database created
- [ ] `devmetrics_user` created with proper permissions
- [ ] Can connect via psql: `psql -U devmetrics_user -d devmetrics -h localhost`
- [ ] Connection string tested

## Commands
```bash
brew install postgresql@15
brew services start postgresql@15
psql postgres -c "CREATE DATABASE devmetrics;"
psql postgres -c "CREATE USER devmetrics_user WITH PASSWORD 'devpass123';"
psql postgres -c "GRANT ALL PRIVILEGES ON DATABASE devmetrics TO devmetrics_user;"
```

## Dependencies
None

## Estimated Time
1-2 hours

---
📝 **Note**: Feel free to modify this task or add additional requirements as needed!"#,
    },
    TaskDefinition {
        id: "TASK-002",
        title: "Install and Configure Redis",
        task_type: TaskType::Chore,
        priority: Priority::P0Critical,
        category: Category::Infrastructure,
        size: Size::S,
        sprint: Sprint::Sprint1,
        description: r#"## Description
Install Redis for caching and session management, verify connectivity.

## Acceptance Criteria
- [ ] Redis installed via Homebrew
- [ ] Redis service running automatically
- [ ] `redis-cli ping` returns PONG
- [ ] Redis accessible at localhost:6379
- [ ] Connection tested from Node.js

## Commands
```bash
brew install redis
brew services start redis
redis-cli ping
```

## Dependencies
None

## Estimated Time
30 minutes

---
📝 **Note**: This is a flexible task - adapt as needed for your setup!"#,
    },
    TaskDefinition {
        id: "TASK-003",
        title: "Initialize API Project Structure",
        task_type: TaskType::Chore,
        priority: Priority::P0Critical,
        category: Category::Backend,
        size: Size::M,
        sprint: Sprint::Sprint1,
        description: r#"## Description
Set up Fastify API project with TypeScript, proper folder structure, and configuration files.

## Acceptance Criteria
- [ ] `apps/api` directory structure created
- [ ] `package.json` initialized with proper metadata
- [ ] TypeScript configuration set to strict mode
- [ ] Folder structure in place (routes, services, middleware, utils, types)
- [ ] `.env` file configured
- [ ] `.gitignore` includes node_modules, .env, dist
- [ ] ESLint and Prettier configured

## Dependencies
- TASK-001 (PostgreSQL)
- TASK-002 (Redis)

## Estimated Time
2-3 hours

---
💡 **Tip**: Use AI to generate boilerplate folder structure and configs!"#,
    },
    TaskDefinition {
        id: "TASK-004",
        title: "Install Backend Dependencies",
        task_type: TaskType::Chore,
        priority: Priority::P0Critical,
        category: Category::Backend,
        size: Size::Xs,
        sprint: Sprint::Sprint1,
        description: r#"## Description
Install the runtime and development dependencies for the API project.

## Acceptance Criteria
- [ ] Fastify and its core plugins installed (`@fastify/cors`, `@fastify/helmet`, `@fastify/jwt`)
- [ ] Prisma client and CLI installed
- [ ] `ioredis` installed
- [ ] `zod` installed for validation
- [ ] TypeScript, `tsx` and type packages installed as dev dependencies
- [ ] `npm run dev` starts without missing-module errors

## Dependencies
- TASK-003 (API Project Structure)

## Estimated Time
1 hour

---
📝 **Note**: Pin major versions in `package.json` to avoid surprise upgrades."#,
    },
    TaskDefinition {
        id: "TASK-005",
        title: "Configure Prisma and Database Schema",
        task_type: TaskType::Feature,
        priority: Priority::P0Critical,
        category: Category::Backend,
        size: Size::M,
        sprint: Sprint::Sprint1,
        description: r#"## Description
Initialize Prisma, model the core entities and run the first migration.

## Acceptance Criteria
- [ ] `prisma/schema.prisma` points at the `devmetrics` database
- [ ] Models defined: User, Repository, Commit, PullRequest, MetricSnapshot
- [ ] Relations and indexes declared
- [ ] Initial migration created and applied
- [ ] Prisma client generated and importable from the API
- [ ] Seed script inserts sample data

## Commands
```bash
npx prisma init
npx prisma migrate dev --name init
npx prisma db seed
```

## Dependencies
- TASK-001 (PostgreSQL)
- TASK-004 (Backend Dependencies)

## Estimated Time
3-4 hours"#,
    },
    TaskDefinition {
        id: "TASK-006",
        title: "Create Fastify Server Setup",
        task_type: TaskType::Feature,
        priority: Priority::P0Critical,
        category: Category::Backend,
        size: Size::M,
        sprint: Sprint::Sprint1,
        description: r#"## Description
Create the Fastify server entry point with plugin registration and a health check.

## Acceptance Criteria
- [ ] `src/server.ts` builds and starts the Fastify instance
- [ ] CORS and Helmet plugins registered
- [ ] `GET /health` returns status of PostgreSQL and Redis
- [ ] Graceful shutdown closes database and Redis connections
- [ ] Request logging enabled through the Fastify logger

## Dependencies
- TASK-004 (Backend Dependencies)
- TASK-005 (Prisma & Database Schema)

## Estimated Time
2-3 hours"#,
    },
    TaskDefinition {
        id: "TASK-007",
        title: "Create Configuration Management",
        task_type: TaskType::Feature,
        priority: Priority::P0Critical,
        category: Category::Backend,
        size: Size::S,
        sprint: Sprint::Sprint1,
        description: r#"## Description
Centralize environment configuration with validation so the server fails fast on bad settings.

## Acceptance Criteria
- [ ] `src/config/index.ts` loads `.env` once at startup
- [ ] Schema validation with `zod` for every variable
- [ ] Typed config object exported for the rest of the app
- [ ] Missing required variables produce a clear startup error
- [ ] `.env.example` documents every variable

## Dependencies
- TASK-006 (Fastify Server Setup)

## Estimated Time
1-2 hours

---
💡 **Tip**: Keep secrets out of logs when printing the loaded config!"#,
    },
    TaskDefinition {
        id: "TASK-008",
        title: "Implement Error Handling Middleware",
        task_type: TaskType::Feature,
        priority: Priority::P1High,
        category: Category::Backend,
        size: Size::S,
        sprint: Sprint::Sprint1,
        description: r#"## Description
Add a global error handler that maps failures to consistent JSON responses.

## Acceptance Criteria
- [ ] Custom `AppError` class with status code and error code
- [ ] Fastify `setErrorHandler` registered
- [ ] Validation errors return 400 with field details
- [ ] Unknown errors return 500 without leaking stack traces
- [ ] Errors are logged with request id

## Dependencies
- TASK-006 (Fastify Server Setup)
- TASK-007 (Configuration Management)

## Estimated Time
2 hours"#,
    },
    TaskDefinition {
        id: "TASK-009",
        title: "Set Up Redis Caching Layer",
        task_type: TaskType::Feature,
        priority: Priority::P1High,
        category: Category::Backend,
        size: Size::M,
        sprint: Sprint::Sprint1,
        description: r#"## Description
Wrap Redis in a small cache service used by the metrics endpoints.

## Acceptance Criteria
- [ ] `CacheService` with `get`, `set` (with TTL) and `invalidate`
- [ ] Connection configured from the validated config
- [ ] JSON serialization of cached values
- [ ] Cache misses fall through to the database
- [ ] Unit tests with a mocked Redis client

## Dependencies
- TASK-002 (Redis)
- TASK-007 (Configuration Management)

## Estimated Time
3-4 hours

---
📝 **Note**: Start with simple key prefixes per entity; tune TTLs later."#,
    },
];
