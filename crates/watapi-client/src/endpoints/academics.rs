//! Courses, terms, codes and awards.

use watapi_core::Response;

use super::{Awards, Codes, Courses, Terms};
use crate::error::ClientError;

path_segments! {
    /// Code tables served under `codes/`.
    CodeType {
        /// Organizational units.
        Units => "units",
        /// Term codes.
        Terms => "terms",
        /// Faculty and group codes.
        Groups => "groups",
        /// Subject codes.
        Subjects => "subjects",
        /// Instruction types.
        Instructions => "instructions",
    }
}

impl Awards<'_> {
    /// Graduate awards.
    pub async fn graduate(self) -> Result<Response, ClientError> {
        self.client.get("awards/graduate.json").await
    }

    /// Undergraduate awards.
    pub async fn undergraduate(self) -> Result<Response, ClientError> {
        self.client.get("awards/undergraduate.json").await
    }
}

impl Codes<'_> {
    /// One code table.
    pub async fn lookup(self, code_type: CodeType) -> Result<Response, ClientError> {
        self.client.get(&format!("codes/{code_type}.json")).await
    }
}

impl Courses<'_> {
    /// Every course offered. This is a very large response.
    pub async fn all(self) -> Result<Response, ClientError> {
        self.client.get("courses.json").await
    }

    /// Courses offered under `subject`, e.g. `CS`.
    pub async fn by_subject(self, subject: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("courses/{subject}.json")).await
    }

    /// Course by its catalog id, e.g. `004380`.
    pub async fn by_id(self, course_id: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("courses/{course_id}.json")).await
    }

    /// Schedule of one class by class number.
    pub async fn class_schedule(self, class_number: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("courses/{class_number}/schedule.json"))
            .await
    }

    /// Course details, e.g. `course("CS", "136")`.
    pub async fn course(self, subject: &str, catalog_number: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("courses/{subject}/{catalog_number}.json"))
            .await
    }

    /// Class schedule of a course.
    pub async fn schedule(self, subject: &str, catalog_number: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("courses/{subject}/{catalog_number}/schedule.json"))
            .await
    }

    /// Prerequisites of a course.
    pub async fn prerequisites(
        self,
        subject: &str,
        catalog_number: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .get(&format!("courses/{subject}/{catalog_number}/prerequisites.json"))
            .await
    }

    /// Exam schedule of a course.
    pub async fn exam_schedule(
        self,
        subject: &str,
        catalog_number: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .get(&format!("courses/{subject}/{catalog_number}/examschedule.json"))
            .await
    }
}

impl Terms<'_> {
    /// Previous, current and next terms.
    pub async fn list(self) -> Result<Response, ClientError> {
        self.client.get("terms/list.json").await
    }

    /// Courses offered in `term`, e.g. `"1179"` for Fall 2017.
    pub async fn courses(self, term: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("terms/{term}/courses.json")).await
    }

    /// Exam schedule for `term`.
    pub async fn exam_schedule(self, term: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("terms/{term}/examschedule.json"))
            .await
    }

    /// Class schedule of every course under `subject` in `term`.
    pub async fn subject_schedule(self, term: &str, subject: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("terms/{term}/{subject}/schedule.json"))
            .await
    }

    /// Class schedule of one course in `term`.
    pub async fn course_schedule(
        self,
        term: &str,
        subject: &str,
        catalog_number: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .get(&format!("terms/{term}/{subject}/{catalog_number}/schedule.json"))
            .await
    }

    /// Enrollment totals for `term`.
    pub async fn enrollment(self, term: &str) -> Result<Response, ClientError> {
        self.client.get(&format!("terms/{term}/enrollment.json")).await
    }

    /// Enrollment totals for `subject` in `term`.
    pub async fn subject_enrollment(
        self,
        term: &str,
        subject: &str,
    ) -> Result<Response, ClientError> {
        self.client
            .get(&format!("terms/{term}/{subject}/enrollment.json"))
            .await
    }

    /// Employer information sessions in `term`.
    pub async fn info_sessions(self, term: &str) -> Result<Response, ClientError> {
        self.client
            .get(&format!("terms/{term}/infosessions.json"))
            .await
    }
}
