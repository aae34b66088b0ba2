pub mod configuration;

pub mod convolution {
    pub mod convolutionerror;
    pub mod samplinggrid;
    pub mod convolutionengine;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod function {
        pub mod realfunction;
        pub mod canonicalfunction;
        pub mod namedfunction;
        pub mod pointwise;
        pub mod impulse;
    }
}

pub mod render {
    pub mod renderer;
    pub mod convolutionanimation;
    pub mod jsonlinesrenderer;
}

pub mod telemetry;

pub mod verification {
    pub mod testgrid;
    pub mod rmsd;
    pub mod property;
    pub mod propertyverifier;
    pub mod verificationreport;
}
