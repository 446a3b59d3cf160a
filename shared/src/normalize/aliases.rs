//! Field alias tables
//!
//! Order matters: the first alias that yields a value wins. When the
//! backend introduces a new spelling, add it here and extend the fixture
//! tests in `shared/tests/normalize_fixtures.rs`.

pub const ID: &[&str] = &["id", "_id", "uuid"];
pub const FIRST_NAME: &[&str] = &["firstName", "first_name"];
pub const LAST_NAME: &[&str] = &["lastName", "last_name"];
pub const EMAIL: &[&str] = &["email", "emailAddress", "email_address"];
pub const PHONE: &[&str] = &["phone", "phoneNumber", "phone_number", "mobile", "contact"];
pub const STATUS: &[&str] = &["status", "state"];
pub const CREATED_AT: &[&str] = &["createdAt", "created_at", "date"];

pub mod member {
    pub const ID: &[&str] = &["id", "_id", "memberId", "member_id"];
    pub const FULL_NAME: &[&str] = &["fullName", "full_name", "name"];
    pub const FALLBACK_NAME: &[&str] = &["memberName", "member_name"];
    pub const STATUS: &[&str] = &["status", "membershipStatus", "membership_status"];
    pub const IS_ACTIVE: &[&str] = &["isActive", "is_active", "active"];
    pub const PLAN: &[&str] = &[
        "membershipPlan",
        "membership_plan",
        "plan",
        "planName",
        "plan.name",
        "membershipType",
        "membership_type",
    ];
    pub const UNKNOWN: &str = "Unknown Member";
}

pub mod staff {
    pub const ID: &[&str] = &["id", "_id", "staffId", "staff_id", "trainerId", "trainer_id"];
    pub const FULL_NAME: &[&str] = &["fullName", "full_name", "name"];
    pub const FALLBACK_NAME: &[&str] = &["staffName", "staff_name", "trainerName", "username"];
    pub const ROLE: &[&str] = &["role", "designation", "position", "jobTitle"];
    pub const DEPARTMENT: &[&str] = &["department", "dept"];
    pub const BRANCH: &[&str] = &["branch", "branchName", "branch_name", "location"];
    pub const BASE_SALARY: &[&str] = &["baseSalary", "base_salary", "salary", "basicSalary", "basic_salary"];
    pub const MONTHLY_TARGET: &[&str] = &["monthlyTarget", "monthly_target"];
    pub const ALLOWANCES: &[&str] = &["allowances", "allowance", "totalAllowances"];
    pub const DEDUCTIONS: &[&str] = &["deductions", "deduction", "totalDeductions"];
    pub const OVERTIME_HOURS: &[&str] = &["overtimeHours", "overtime_hours", "otHours", "ot_hours"];
    pub const OT_RATE: &[&str] = &["otRate", "ot_rate", "overtimeRate", "overtime_rate"];
    pub const PRESENT_DAYS: &[&str] = &["presentDays", "present_days", "attendanceDays", "daysPresent"];
    pub const WORKING_DAYS: &[&str] = &["workingDays", "working_days"];
    pub const UNKNOWN: &str = "Unknown Staff";
}

pub mod follow_up {
    pub const MEMBER_ID: &[&str] = &["memberId", "member_id", "member.id", "member._id", "leadId"];
    pub const MEMBER_NAME: &[&str] = &[
        "memberName",
        "member_name",
        "member.fullName",
        "member.name",
        "leadName",
        "lead.name",
        "name",
    ];
    pub const SUBJECT: &[&str] = &["subject", "title", "purpose", "notes"];
    pub const TYPE: &[&str] = &["type", "followUpType", "follow_up_type", "channel"];
    pub const PRIORITY: &[&str] = &["priority"];
    pub const DUE_DATE: &[&str] = &["dueDate", "due_date", "scheduledDate", "followUpDate", "date"];
    pub const DUE_TIME: &[&str] = &["dueTime", "due_time", "time", "scheduledTime"];
    pub const ASSIGNED_TO: &[&str] = &[
        "assignedTo.name",
        "assignedTo",
        "assigned_to",
        "assignedStaff.name",
        "staffName",
        "staff.name",
    ];
    pub const COMPLETED_AT: &[&str] = &["completedAt", "completed_at", "completedDate", "updatedAt"];
    pub const UNASSIGNED: &str = "Unassigned";
    pub const DEFAULT_SUBJECT: &str = "Follow-up";
}

pub mod asset {
    pub const NAME: &[&str] = &["name", "asset_name", "assetName", "title"];
    pub const CATEGORY: &[&str] = &["category", "category_name", "type"];
    pub const COST: &[&str] = &["cost", "purchase_cost", "purchaseCost", "original_value"];
    pub const CURRENT_VALUE: &[&str] = &["current_value", "currentValue", "value"];
    pub const CONDITION: &[&str] = &["condition_desc", "condition", "conditionDesc"];
    pub const WARRANTY: &[&str] = &["warranty_expiry", "warrantyExpiry", "warranty_end"];
    pub const MAINTENANCE: &[&str] = &["maintenance_date", "maintenanceDate", "next_maintenance"];
    pub const LOCATION: &[&str] = &["location", "location_name", "branch"];
    pub const VENDOR: &[&str] = &["vendor", "vendor_name", "supplier"];
}

pub mod transaction {
    pub const ASSET_ID: &[&str] = &["assetId", "asset_id", "asset.id", "asset._id"];
    pub const ASSET_NAME: &[&str] = &["assetName", "asset_name", "asset.name"];
    pub const TYPE: &[&str] = &["type", "transactionType", "transaction_type"];
    pub const VALUE: &[&str] = &["value", "amount", "cost"];
    pub const DATE: &[&str] = &["date", "transactionDate", "transaction_date", "createdAt"];
    pub const LOCATION: &[&str] = &["location", "toLocation", "to_location"];
    pub const ASSIGNED_TO: &[&str] = &["assignedTo", "assigned_to"];
    pub const VENDOR: &[&str] = &["vendor", "vendorName", "vendor_name", "supplier"];
    pub const UNKNOWN_ASSET: &str = "Unknown Asset";
}

pub mod lead {
    pub const SOURCE: &[&str] = &["source", "leadSource", "lead_source"];
    pub const PRIORITY: &[&str] = &["priority"];
    pub const SCORE: &[&str] = &["score", "leadScore", "lead_score"];
    pub const ASSIGNED_TO: &[&str] = &["assignedTo.name", "assignedTo", "assigned_to"];
    pub const NEXT_FOLLOW_UP: &[&str] = &["nextFollowUpDate", "next_follow_up_date", "followUpDate"];
    pub const UNKNOWN: &str = "Unknown Lead";
}

pub mod voucher {
    pub const NUMBER: &[&str] = &["voucherNumber", "voucher_number", "receiptNumber", "receipt_number", "number"];
    pub const PARTY: &[&str] = &[
        "party",
        "partyName",
        "payee",
        "payeeName",
        "receivedFrom",
        "received_from",
        "vendor",
        "memberName",
    ];
    pub const AMOUNT: &[&str] = &["amount", "totalAmount", "total_amount", "total"];
    pub const PAID_AMOUNT: &[&str] = &["paidAmount", "paid_amount", "amountPaid"];
    pub const DATE: &[&str] = &["date", "voucherDate", "voucher_date", "receiptDate", "createdAt"];
    pub const METHOD: &[&str] = &["method", "paymentMethod", "payment_method", "mode"];
    pub const PAYMENTS: &[&str] = &["payments", "paymentHistory"];
    pub const REFERENCE: &[&str] = &["reference", "referenceNumber", "ref"];
}

pub mod bill {
    pub const VENDOR: &[&str] = &["vendor", "vendorName", "supplier", "party"];
    pub const AMOUNT: &[&str] = &["amount", "total", "totalAmount"];
    pub const DUE_DATE: &[&str] = &["dueDate", "due_date"];
}

pub mod booking {
    pub const MEMBER_ID: &[&str] = &["member_id", "memberId", "member.id"];
    pub const TRAINER_ID: &[&str] = &["trainer_id", "trainerId", "trainer.id", "staff_id"];
    pub const TRAINER: &[&str] = &["trainer", "trainer_name", "trainerName", "trainer.name"];
    pub const CLASS_ID: &[&str] = &["class_id", "classId"];
    pub const DATE: &[&str] = &["date", "booking_date", "bookingDate", "start_time"];
}

pub mod feedback {
    pub const MEMBER_ID: &[&str] = &["member_id", "memberId"];
    pub const STAFF_ID: &[&str] = &["trainer_id", "trainerId", "staff_id", "staffId"];
    pub const RATING: &[&str] = &["rating", "overall_rating", "overallRating", "score"];
    pub const RETURN_SCORE: &[&str] = &["return_score", "returnScore", "nps_score", "likelihood_to_return"];
    pub const COMMENT: &[&str] = &["comment", "comments", "feedback", "notes"];
}

pub mod catalog {
    pub const NAME: &[&str] = &["name", "title", "className", "class_name", "planName", "productName"];
    pub const PRICE: &[&str] = &["price", "amount", "fee", "cost"];
    pub const STOCK: &[&str] = &["stock", "quantity", "stock_quantity", "inventory"];
    pub const TRAINER_ID: &[&str] = &["trainer_id", "trainerId", "instructor_id"];
    pub const CAPACITY: &[&str] = &["capacity", "max_capacity", "maxCapacity"];
    pub const DURATION: &[&str] = &["duration", "durationMonths", "duration_months", "durationDays"];
}

pub mod facility {
    pub const NAME: &[&str] = &["name", "facilityName", "facility_name", "branch"];
    pub const LOCATION: &[&str] = &["location", "address", "city"];
    pub const CAPACITY: &[&str] = &["capacity", "max_capacity"];
}

pub mod production {
    pub const NAME: &[&str] = &["name", "recipeName", "recipe_name"];
    pub const CATEGORY: &[&str] = &["category", "type"];
    pub const INGREDIENTS: &[&str] = &["ingredients", "items"];
    pub const INGREDIENT_NAME: &[&str] = &["name", "ingredient", "ingredientName", "item"];
    pub const QUANTITY: &[&str] = &["quantity", "qty", "amount"];
    pub const UNIT: &[&str] = &["unit", "uom"];
    pub const UNIT_COST: &[&str] = &["unitCost", "unit_cost", "cost", "price"];
    pub const YIELD_QUANTITY: &[&str] = &["yieldQuantity", "yield_quantity", "yield", "servings"];
    pub const YIELD_UNIT: &[&str] = &["yieldUnit", "yield_unit"];
    pub const RECIPE_ID: &[&str] = &["recipeId", "recipe_id", "recipe.id", "recipe._id"];
    pub const RECIPE_NAME: &[&str] = &["recipeName", "recipe_name", "recipe.name"];
    pub const PRODUCED_AT: &[&str] = &["producedAt", "produced_at", "productionDate", "date"];
}
