pub mod compile_time {
    pub mod file_processing {
        /// Maximum document size allowed for processing (10MB)
        /// SECURITY: Prevents DoS via oversized inputs
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
    }

    pub mod lexical {
        /// Maximum string literal size (1MB)
        /// SECURITY: Prevents DoS via enormous string literals
        pub const MAX_STRING_SIZE: usize = 1_048_576;

        /// Maximum tokens allowed in a single document
        /// SECURITY: Prevents DoS via token explosion
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;
    }

    pub mod syntax {
        /// Maximum parser recursion depth
        /// SECURITY: Prevents stack overflow via deep nesting
        pub const MAX_PARSE_DEPTH: usize = 128;
    }

    pub mod semantic {
        /// Maximum semantic diagnostics collected per document
        /// RESOURCE: Bounds memory on pathological inputs
        pub const MAX_DIAGNOSTICS: usize = 1_000;
    }

    pub mod logging {
        /// In-memory log buffer size
        /// RESOURCE: Controls memory usage for captured events
        pub const LOG_BUFFER_SIZE: usize = 1_000;

        /// Maximum events the batch collector retains
        /// RESOURCE: Prevents unbounded growth across a batch run
        pub const MAX_COLLECTED_EVENTS: usize = 10_000;
    }
}
