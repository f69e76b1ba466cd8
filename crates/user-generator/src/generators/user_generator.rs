//! 用户数据生成器
//!
//! 按租户列表顺序、租户内按用户序号顺序逐条生成用户和设备，
//! 每生成一个用户就立即写出对应的两行，只保留每个租户前 N 个用户作为测试用户清单。
//! 内存占用只与 租户数 × 清单上限 相关，与用户总数无关。

use fixture_shared::config::GeneratorSettings;
use fixture_shared::error::Result;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::count_policy::CountPolicy;
use crate::models::{
    DeviceInfo, DeviceRecord, SimulatedDevice, TenantDescriptor, TenantManifestEntry,
    TestUserManifest, TestUserSample, UserRecord,
};
use crate::output::FixtureSink;

/// 手机号中用户序号的固定宽度
const PHONE_INDEX_WIDTH: usize = 7;

/// 手机号中租户序号保持固定宽度的租户数上限
const PHONE_FIXED_WIDTH_TENANTS: usize = 10;

/// 根据租户序号和用户序号生成手机号
///
/// 格式为 `090` + 租户序号 + 7 位补零的用户序号。
/// 租户序号不补齐宽度：租户序号达到两位数后号码变长，不同租户之间可能重号
/// （例如租户 1 的第 10000001 个用户与租户 11 的第 1 个用户）。
pub fn phone_number(tenant_index: usize, user_index: u64) -> String {
    format!(
        "090{}{:0width$}",
        tenant_index,
        user_index,
        width = PHONE_INDEX_WIDTH
    )
}

/// 单个租户的生成统计
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantStats {
    pub tenant_id: String,
    pub users: u64,
    pub sampled: usize,
}

/// 一次生成的统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub total_users: u64,
    pub total_devices: u64,
    pub tenants: Vec<TenantStats>,
}

/// 生成结果
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub manifest: TestUserManifest,
    pub stats: GenerationStats,
}

/// 用户数据生成器
pub struct UserGenerator {
    settings: GeneratorSettings,
    device: SimulatedDevice,
}

impl UserGenerator {
    /// 创建生成器
    pub fn new(settings: GeneratorSettings) -> Self {
        Self {
            settings,
            device: SimulatedDevice::default(),
        }
    }

    /// 为所有租户生成数据
    ///
    /// 用户行和设备行写入 `sink`，测试用户清单随结果返回。
    /// 任何写入错误都会立即中止生成，已写出的行不做回滚。
    pub fn generate<S: FixtureSink>(
        &self,
        tenants: &[TenantDescriptor],
        policy: &CountPolicy,
        sink: &mut S,
    ) -> Result<GenerationOutput> {
        let total = policy.total(tenants.len());
        info!(
            tenants = tenants.len(),
            total_users = total,
            sample_cap = self.settings.sample_cap,
            "开始生成用户数据"
        );
        if policy.has_override() && tenants.len() > 1 {
            info!(
                first_tenant_users = policy.first_count(),
                other_tenants = tenants.len() - 1,
                users_per_tenant = policy.rest_count(),
                "第一个租户使用单独的用户数"
            );
        }
        if tenants.len() > PHONE_FIXED_WIDTH_TENANTS {
            warn!(
                tenants = tenants.len(),
                "租户序号超过一位数，手机号长度将不一致，跨租户可能出现重复号码"
            );
        }

        let mut manifest = TestUserManifest::with_capacity(tenants.len());
        let mut stats = GenerationStats::default();
        let mut generated: u64 = 0;

        for (tenant_index, tenant) in tenants.iter().enumerate() {
            let count = policy.count_for(tenant_index);
            info!(
                tenant = tenant_index + 1,
                of = tenants.len(),
                tenant_id = %tenant.tenant_id,
                users = count,
                "开始生成租户数据"
            );

            let mut entry = TenantManifestEntry::for_tenant(tenant);

            for user_index in 1..=count {
                let (user, device) = self.build_user(tenant, tenant_index, user_index);

                sink.write_user(&user)?;
                sink.write_device(&device)?;

                if user_index <= self.settings.sample_cap {
                    entry
                        .users
                        .push(TestUserSample::from_user(&user, device.device_id));
                }

                generated += 1;
                if self.settings.progress_interval > 0
                    && generated % self.settings.progress_interval == 0
                {
                    info!(generated, total, "生成进度");
                }
            }

            debug!(
                tenant_id = %tenant.tenant_id,
                sampled = entry.users.len(),
                "租户数据生成完成"
            );

            stats.tenants.push(TenantStats {
                tenant_id: tenant.tenant_id.clone(),
                users: count,
                sampled: entry.users.len(),
            });
            manifest.push(entry);
        }

        stats.total_users = generated;
        stats.total_devices = generated;

        info!(
            total_users = stats.total_users,
            total_devices = stats.total_devices,
            "用户数据生成完成"
        );

        Ok(GenerationOutput { manifest, stats })
    }

    /// 构造单个用户及其设备
    ///
    /// user_sub、device_id 和 external_user_id 各自使用独立的随机 UUID。
    fn build_user(
        &self,
        tenant: &TenantDescriptor,
        tenant_index: usize,
        user_index: u64,
    ) -> (UserRecord, DeviceRecord) {
        let user_sub = Uuid::new_v4();
        let device_id = Uuid::new_v4();
        let external_user_id = format!("user_{}", Uuid::new_v4());
        let email = format!("{}@{}", external_user_id, self.settings.email_domain);
        let phone = phone_number(tenant_index, user_index);

        let info = DeviceInfo::simulated(device_id, &self.device);
        let device = DeviceRecord::from_info(&info, &tenant.tenant_id, user_sub, &self.device);
        let user = UserRecord::verified(
            user_sub,
            &tenant.tenant_id,
            &self.settings.provider_id,
            external_user_id,
            email,
            phone,
            info,
        );

        (user, device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{CountingSink, MemorySink};
    use std::collections::HashSet;

    fn tenants(ids: &[&str]) -> Vec<TenantDescriptor> {
        ids.iter().map(|id| TenantDescriptor::new(*id)).collect()
    }

    fn default_generator() -> UserGenerator {
        UserGenerator::new(GeneratorSettings::default())
    }

    fn generator_with_cap(sample_cap: u64) -> UserGenerator {
        UserGenerator::new(GeneratorSettings {
            sample_cap,
            ..Default::default()
        })
    }

    #[test]
    fn test_phone_number() {
        assert_eq!(phone_number(0, 1), "09000000001");
        assert_eq!(phone_number(3, 1234567), "09031234567");
        // 租户序号两位数时号码变长
        assert_eq!(phone_number(12, 1), "090120000001");
        // 用户序号超过 7 位不截断
        assert_eq!(phone_number(0, 12_345_678), "090012345678");
    }

    #[test]
    fn test_single_tenant_three_users() {
        let generator = default_generator();
        let mut sink = MemorySink::default();

        let output = generator
            .generate(&tenants(&["T1"]), &CountPolicy::Uniform(3), &mut sink)
            .unwrap();

        assert_eq!(sink.users.len(), 3);
        assert_eq!(sink.devices.len(), 3);
        assert_eq!(output.manifest.len(), 1);
        assert_eq!(output.manifest[0].tenant_id, "T1");
        assert_eq!(output.manifest[0].users.len(), 3);
        assert_eq!(output.stats.total_users, 3);
        assert_eq!(output.stats.total_devices, 3);
    }

    #[test]
    fn test_sample_is_capped() {
        let generator = default_generator();
        let mut sink = CountingSink::default();

        let output = generator
            .generate(
                &tenants(&["T1", "T2"]),
                &CountPolicy::from_options(10, Some(1000)),
                &mut sink,
            )
            .unwrap();

        assert_eq!(sink.users, 1010);
        assert_eq!(sink.devices, 1010);
        assert_eq!(output.manifest[0].users.len(), 500);
        assert_eq!(output.manifest[1].users.len(), 10);
        assert_eq!(output.stats.tenants[0].sampled, 500);
        assert_eq!(output.stats.tenants[1].users, 10);
    }

    #[test]
    fn test_user_and_device_are_paired() {
        let generator = default_generator();
        let mut sink = MemorySink::default();

        generator
            .generate(&tenants(&["T1", "T2"]), &CountPolicy::Uniform(5), &mut sink)
            .unwrap();

        for (user, device) in sink.users.iter().zip(&sink.devices) {
            assert_eq!(user.sub, device.user_sub);
            assert_eq!(user.tenant_id, device.tenant_id);
            assert_eq!(user.devices.len(), 1);
            assert_eq!(user.devices[0].id, device.device_id);
        }
    }

    #[test]
    fn test_user_fields() {
        let generator = default_generator();
        let mut sink = MemorySink::default();

        generator
            .generate(&tenants(&["T1", "T2"]), &CountPolicy::Uniform(2), &mut sink)
            .unwrap();

        let user = &sink.users[0];
        assert!(user.external_user_id.starts_with("user_"));
        assert_eq!(user.email, format!("{}@example.com", user.external_user_id));
        assert_eq!(user.provider_id, "idp-server");
        assert_eq!(user.phone_number, "09000000001");
        // 第二个租户的第二个用户
        assert_eq!(sink.users[3].phone_number, "09010000002");
        assert_eq!(sink.users[3].tenant_id, "T2");
    }

    #[test]
    fn test_identifiers_are_unique() {
        let generator = default_generator();
        let mut sink = MemorySink::default();

        generator
            .generate(&tenants(&["T1", "T2"]), &CountPolicy::Uniform(50), &mut sink)
            .unwrap();

        let users = &sink.users;
        let subs: HashSet<_> = users.iter().map(|u| u.sub).collect();
        let externals: HashSet<_> = users.iter().map(|u| &u.external_user_id).collect();
        let devices: HashSet<_> = sink.devices.iter().map(|d| d.device_id).collect();
        assert_eq!(subs.len(), 100);
        assert_eq!(externals.len(), 100);
        assert_eq!(devices.len(), 100);
    }

    #[test]
    fn test_sample_matches_first_rows() {
        let generator = generator_with_cap(2);
        let mut sink = MemorySink::default();

        let output = generator
            .generate(&tenants(&["T1"]), &CountPolicy::Uniform(4), &mut sink)
            .unwrap();

        let sampled = &output.manifest[0].users;
        assert_eq!(sampled.len(), 2);
        let rows = sink.users.iter().zip(&sink.devices);
        for (sample, (user, device)) in sampled.iter().zip(rows) {
            assert_eq!(sample.user_id, user.sub);
            assert_eq!(sample.device_id, device.device_id);
            assert_eq!(sample.email, user.email);
            assert_eq!(sample.phone, user.phone_number);
            assert_eq!(sample.external_user_id, user.external_user_id);
            assert_eq!(sample.provider_id, "idp-server");
        }
    }

    #[test]
    fn test_zero_users_for_tenant() {
        let generator = default_generator();
        let mut sink = MemorySink::default();

        let output = generator
            .generate(
                &tenants(&["T1", "T2"]),
                &CountPolicy::FirstTenantOverride { first: 2, rest: 0 },
                &mut sink,
            )
            .unwrap();

        assert_eq!(sink.users.len(), 2);
        assert_eq!(output.manifest.len(), 2);
        assert!(output.manifest[1].users.is_empty());
    }

    #[test]
    fn test_sink_error_aborts() {
        struct FailingSink {
            remaining: usize,
        }

        impl FixtureSink for FailingSink {
            fn write_user(&mut self, _user: &UserRecord) -> Result<()> {
                if self.remaining == 0 {
                    return Err(std::io::Error::other("disk full").into());
                }
                self.remaining -= 1;
                Ok(())
            }

            fn write_device(&mut self, _device: &DeviceRecord) -> Result<()> {
                Ok(())
            }
        }

        let generator = default_generator();
        let mut sink = FailingSink { remaining: 2 };

        let err = generator
            .generate(&tenants(&["T1"]), &CountPolicy::Uniform(10), &mut sink)
            .unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }
}
